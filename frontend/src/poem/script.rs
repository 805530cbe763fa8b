use serde::Deserialize;
use thiserror::Error;

const DEFAULT_CHAR_INTERVAL_MS: u64 = 25;

fn default_char_interval() -> u64 {
    DEFAULT_CHAR_INTERVAL_MS
}

/// One line of the poem and its reveal timing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TextLine {
    pub content: String,
    /// Delay from sequence start before the first character is scheduled.
    pub start_offset_ms: u64,
    #[serde(default = "default_char_interval")]
    pub char_interval_ms: u64,
    /// The line whose completion marks the whole sequence as complete.
    #[serde(default)]
    pub is_final: bool,
}

impl TextLine {
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Stanza {
    pub lines: Vec<TextLine>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PoemScript {
    pub title: String,
    pub tagline: String,
    pub stanzas: Vec<Stanza>,
}

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("poem script is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("poem script has no lines")]
    Empty,
    #[error("no line is marked final")]
    MissingFinalLine,
    #[error("{0} lines are marked final, expected one")]
    MultipleFinalLines(usize),
    #[error("line {line} has a zero character interval")]
    ZeroInterval { line: usize },
}

impl PoemScript {
    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        let script: PoemScript = serde_json::from_str(json)?;
        script.validate()?;
        Ok(script)
    }

    pub fn validate(&self) -> Result<(), ScriptError> {
        if self.line_count() == 0 {
            return Err(ScriptError::Empty);
        }
        if let Some(line) = self.lines().position(|l| l.char_interval_ms == 0) {
            return Err(ScriptError::ZeroInterval { line });
        }
        match self.lines().filter(|l| l.is_final).count() {
            0 => Err(ScriptError::MissingFinalLine),
            1 => Ok(()),
            n => Err(ScriptError::MultipleFinalLines(n)),
        }
    }

    /// All lines in reading order; the position is the line id.
    pub fn lines(&self) -> impl Iterator<Item = &TextLine> {
        self.stanzas.iter().flat_map(|s| s.lines.iter())
    }

    pub fn line_count(&self) -> usize {
        self.stanzas.iter().map(|s| s.lines.len()).sum()
    }
}
