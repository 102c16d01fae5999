//! Static per-mode configuration bundles.

use super::{Mode, OptionSet};

/// One labelled display setting of a mode configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    /// Human-readable label, e.g. `Style Guide`.
    pub label: &'static str,
    /// Effective value after option overrides.
    pub value: String,
}

impl Setting {
    fn from_option(label: &'static str, options: &OptionSet, key: &str, default: &str) -> Self {
        Self {
            label,
            value: options.get_or(key, default).to_string(),
        }
    }

    fn fixed(label: &'static str, value: &str) -> Self {
        Self {
            label,
            value: value.to_string(),
        }
    }
}

/// Configuration derived from a mode and the options it was switched with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeConfiguration {
    /// Activation message.
    pub description: &'static str,
    /// Display settings in presentation order.
    pub settings: Vec<Setting>,
    /// Example slash commands available in this mode.
    pub commands: &'static [&'static str],
}

impl ModeConfiguration {
    /// Value of the setting with the given label.
    #[must_use]
    pub fn setting(&self, label: &str) -> Option<&str> {
        self.settings
            .iter()
            .find(|setting| setting.label == label)
            .map(|setting| setting.value.as_str())
    }
}

/// Summary shown by `/mode show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeInfo {
    /// One-line description of the mode.
    pub description: &'static str,
    /// Tool groups the mode advertises.
    pub tools: &'static [&'static str],
}

const PRO_WRITER_COMMANDS: &[&str] = &[
    "/research [topic] - Research and fact-check",
    "/outline [structure] - Create plot outlines",
    "/cite [source] - Manage citations",
    "/export [format] - Export to various formats",
];

const GHOSTWRITER_COMMANDS: &[&str] = &[
    "/voice learn [samples] - Learn client voice",
    "/interview [topics] - Start content interview",
    "/draft [style] - Create collaborative drafts",
    "/safety check - Verify content safety",
];

const NOVEL_AUTO_COMMANDS: &[&str] = &[
    "/world import [source] - Import world settings",
    "/world validate - Check continuity",
    "/character new [type] - Create characters",
    "/story generate [type] - Generate story content",
];

const MODE_LIST: &str = "📚 **Available Writing Modes:**

1. **pro-writer** - Professional Writer Assistant
   - Literary expertise and research tools
   - Citation management and style guides
   - Professional publishing workflows

2. **ghostwriter** - Collaborative Writing
   - Voice analysis and mimicry
   - Interview-based content extraction
   - Safety filters and collaboration tools

3. **novel-auto** - Automated Novel Generation
   - World-building and continuity management
   - Character development and plot generation
   - Knowledge graph-based story consistency

**Usage:**
`/mode [mode-name] [options]`

**Examples:**
`/mode pro-writer --style chicago --genre mystery`
`/mode ghostwriter --profile client-voice.json`
`/mode novel-auto --world eldoria.json`";

/// Overview of all modes with usage examples.
#[must_use]
pub const fn list_available_modes() -> &'static str {
    MODE_LIST
}

impl Mode {
    /// Build this mode's configuration, applying the option overrides it
    /// recognizes. Other options are accepted and ignored.
    #[must_use]
    pub fn configure(self, options: &OptionSet) -> ModeConfiguration {
        match self {
            Self::ProWriter => ModeConfiguration {
                description: "Professional writing mode activated. You now have access to literary expertise, research tools, and publishing workflows.",
                settings: vec![
                    Setting::from_option("Style Guide", options, "style", "chicago"),
                    Setting::from_option("Genre", options, "genre", "general"),
                    Setting::from_option("Citation Format", options, "cite", "chicago"),
                    Setting::fixed("Fact Check", "enabled"),
                ],
                commands: PRO_WRITER_COMMANDS,
            },
            Self::Ghostwriter => ModeConfiguration {
                description: "Ghostwriting mode activated. You can now analyze voices, conduct interviews, and collaborate on content creation.",
                settings: vec![
                    Setting::from_option("Voice Profile", options, "profile", "default"),
                    Setting::from_option("Interview Depth", options, "depth", "comprehensive"),
                    Setting::fixed("Safety Filters", "enabled"),
                    Setting::fixed("Collaboration", "enabled"),
                ],
                commands: GHOSTWRITER_COMMANDS,
            },
            Self::NovelAuto => ModeConfiguration {
                description: "Automated novel generation mode activated. You can now build worlds, manage continuity, and generate story content.",
                settings: vec![
                    Setting::from_option("World Format", options, "world", "json"),
                    Setting::fixed("Continuity Check", "strict"),
                    Setting::fixed("Character Tracking", "enabled"),
                    Setting::fixed("Plot Generation", "enabled"),
                ],
                commands: NOVEL_AUTO_COMMANDS,
            },
        }
    }

    /// Description and tool groups shown by `/mode show`.
    #[must_use]
    pub const fn info(self) -> ModeInfo {
        match self {
            Self::ProWriter => ModeInfo {
                description: "Professional writing mode with literary expertise, research tools, and publishing workflows.",
                tools: &["Research tools", "Citation management", "Style guides", "Export tools"],
            },
            Self::Ghostwriter => ModeInfo {
                description: "Collaborative writing mode for voice analysis, interviews, and co-creation.",
                tools: &["Voice analysis", "Interview tools", "Safety filters", "Collaboration tools"],
            },
            Self::NovelAuto => ModeInfo {
                description: "Automated novel generation with world-building and continuity management.",
                tools: &["World parser", "Continuity engine", "Character bible", "Plot generator"],
            },
        }
    }

    /// Identifiers of the writer tools enabled in this mode.
    #[must_use]
    pub const fn tool_ids(self) -> &'static [&'static str] {
        match self {
            Self::ProWriter => &["research", "citation", "factcheck", "styleguard", "plotanalyzer"],
            Self::Ghostwriter => &[
                "voiceanalyzer",
                "interviewbot",
                "safetyfilter",
                "collaborationtracker",
            ],
            Self::NovelAuto => &[
                "worldparser",
                "continuityengine",
                "characterbible",
                "plotgenerator",
                "timelinekeeper",
            ],
        }
    }
}
