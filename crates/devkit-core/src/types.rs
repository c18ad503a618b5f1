use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Tool
// ---------------------------------------------------------------------------

/// A target AI CLI whose config directory devkit installs into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    Claude,
    Opencode,
    Copilot,
    Codex,
}

impl Tool {
    pub fn all() -> &'static [Tool] {
        &[Tool::Claude, Tool::Opencode, Tool::Copilot, Tool::Codex]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tool::Claude => "claude",
            Tool::Opencode => "opencode",
            Tool::Copilot => "copilot",
            Tool::Codex => "codex",
        }
    }

    /// Binary name looked up on PATH for the installed-on-this-machine check.
    pub fn binary(self) -> &'static str {
        match self {
            Tool::Claude => "claude",
            Tool::Opencode => "opencode",
            Tool::Copilot => "copilot",
            Tool::Codex => "codex",
        }
    }

    /// Whether the tool lacks native agent/skill discovery and needs a
    /// generated AGENTS.md index after install.
    pub fn needs_index(self) -> bool {
        matches!(self, Tool::Copilot | Tool::Codex)
    }

    /// Categories this tool consumes. Rules are Claude-only.
    pub fn categories(self) -> &'static [Category] {
        match self {
            Tool::Claude => &[
                Category::Agents,
                Category::Commands,
                Category::Skills,
                Category::Rules,
            ],
            _ => &[Category::Agents, Category::Commands, Category::Skills],
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Tool {
    type Err = crate::error::DevkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "claude" => Ok(Tool::Claude),
            "opencode" => Ok(Tool::Opencode),
            "copilot" => Ok(Tool::Copilot),
            "codex" => Ok(Tool::Codex),
            _ => Err(crate::error::DevkitError::UnknownTool(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// A component category a plugin manifest can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Agents,
    Commands,
    Skills,
    Rules,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[
            Category::Agents,
            Category::Commands,
            Category::Skills,
            Category::Rules,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Agents => "agents",
            Category::Commands => "commands",
            Category::Skills => "skills",
            Category::Rules => "rules",
        }
    }

    /// Skills are installed as whole directories; everything else is a
    /// single markdown file.
    pub fn is_directory(self) -> bool {
        matches!(self, Category::Skills)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = crate::error::DevkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "agents" => Ok(Category::Agents),
            "commands" => Ok(Category::Commands),
            "skills" => Ok(Category::Skills),
            "rules" => Ok(Category::Rules),
            _ => Err(crate::error::DevkitError::UnknownCategory(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn tool_roundtrip() {
        for tool in Tool::all() {
            assert_eq!(Tool::from_str(tool.as_str()).unwrap(), *tool);
        }
        assert!(Tool::from_str("cursor").is_err());
    }

    #[test]
    fn rules_are_claude_only() {
        assert!(Tool::Claude.categories().contains(&Category::Rules));
        for tool in [Tool::Opencode, Tool::Copilot, Tool::Codex] {
            assert!(!tool.categories().contains(&Category::Rules));
        }
    }

    #[test]
    fn index_only_for_tools_without_discovery() {
        assert!(!Tool::Claude.needs_index());
        assert!(!Tool::Opencode.needs_index());
        assert!(Tool::Copilot.needs_index());
        assert!(Tool::Codex.needs_index());
    }

    #[test]
    fn category_serde_snake_case() {
        let json = serde_json::to_string(&Category::Skills).unwrap();
        assert_eq!(json, "\"skills\"");
    }
}
