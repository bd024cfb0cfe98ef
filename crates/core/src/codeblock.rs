//! Code-block decoration: line numbers, language detection and the toolbar.
//!
//! The functions here only decide what a block gets. Building elements and
//! percent-encoding URLs is left to the host, which has the browser's encoders.

use regex::Regex;
use std::sync::LazyLock;
use wayfinder_types::CodeBlockConfig;

static LANGUAGE_CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"language-(\w+)").expect("BUG: invalid LANGUAGE_CLASS_RE regex literal")
});

/// Language reported when no `language-*` class is present.
pub const AUTO_LANGUAGE: &str = "auto";

pub const LINE_NUMBERS_CLASS: &str = "line-numbers";
pub const LINE_NUMBER_CLASS: &str = "line-number";
pub const HEADER_CLASS: &str = "codeblock-header";
pub const CONTENT_CLASS: &str = "codeblock-content";
/// Class of the wrapper element some site generators put around highlighted code.
pub const WRAPPER_CLASS: &str = "highlighter-rouge";

pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied";

/// A `pre code` block as found in the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CodeBlockSource {
    /// Markup inside the code element; line numbers are counted on this.
    pub inner_html: String,
    /// Plain text of the code; this is what gets copied and shared.
    pub text: String,
    pub code_class: String,
    /// Class of the nearest wrapper ancestor, when there is one.
    pub wrapper_class: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    TryRuby,
    Share,
    Copy,
    ChatGpt,
    Claude,
}

impl ToolKind {
    pub fn label(self) -> &'static str {
        match self {
            ToolKind::TryRuby => "Run",
            ToolKind::Share => "Share",
            ToolKind::Copy => COPY_LABEL,
            ToolKind::ChatGpt => "Open in ChatGPT",
            ToolKind::Claude => "Open in Claude",
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            ToolKind::TryRuby => "codeblock-tool try-ruby-button",
            ToolKind::Share => "codeblock-tool share-button",
            ToolKind::Copy => "codeblock-tool copy-button",
            ToolKind::ChatGpt => "codeblock-tool chatgpt-button",
            ToolKind::Claude => "codeblock-tool claude-button",
        }
    }
}

/// How a tool URL's parameters are appended to its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStyle {
    /// A single `key=value` pair with the value component-encoded.
    Component,
    /// Form-encoded `application/x-www-form-urlencoded` pairs.
    Form,
}

/// An unencoded link target.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolUrl {
    pub prefix: &'static str,
    pub style: QueryStyle,
    pub params: Vec<(&'static str, String)>,
}

impl ToolUrl {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ToolAction {
    /// Opens a URL in a new tab.
    Link(ToolUrl),
    /// Writes the block's text to the clipboard.
    Copy,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CodeTool {
    pub kind: ToolKind,
    pub action: ToolAction,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CodeBlockPlan {
    pub line_count: usize,
    pub language: String,
    pub tools: Vec<CodeTool>,
}

/// Number of line-number labels for a block: one per newline in its markup.
///
/// Highlighters end every line, including the last, with a newline.
pub fn line_count(inner_html: &str) -> usize {
    inner_html.matches('\n').count()
}

fn language_in(class: &str) -> Option<&str> {
    LANGUAGE_CLASS_RE
        .captures(class)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// The block's language from its own class, else its wrapper's, else [`AUTO_LANGUAGE`].
pub fn detect_language(code_class: &str, wrapper_class: Option<&str>) -> String {
    language_in(code_class)
        .or_else(|| wrapper_class.and_then(language_in))
        .unwrap_or(AUTO_LANGUAGE)
        .to_string()
}

pub fn is_ruby(code_class: &str, wrapper_class: Option<&str>) -> bool {
    if code_class.contains("language-ruby")
        || code_class.contains("language-rb")
        || code_class.contains("ruby")
    {
        return true;
    }
    wrapper_class.is_some_and(|w| w.contains("language-ruby") || w.contains("language-rb"))
}

fn assistant_prompt(config: &CodeBlockConfig, code: &str) -> String {
    format!("{}\n\n{}", config.assistant_prompt, code)
}

fn share_url(config: &CodeBlockConfig, code: &str, language: &str) -> ToolUrl {
    ToolUrl {
        prefix: "https://carbon.now.sh/?",
        style: QueryStyle::Form,
        params: vec![
            ("code", code.to_string()),
            ("l", language.to_string()),
            ("bg", config.share_background.clone()),
            ("t", config.share_theme.clone()),
            ("wt", "none".to_string()),
            ("ds", "true".to_string()),
            ("dsyoff", "20px".to_string()),
            ("dsblur", "68px".to_string()),
            ("wc", "true".to_string()),
            ("wa", "true".to_string()),
            ("ln", "false".to_string()),
            ("fl", "1".to_string()),
            ("fm", config.share_font.clone()),
        ],
    }
}

/// Decide the line numbers and toolbar for one block.
///
/// Toolbar order: Run (Ruby only), Share, Copy, ChatGPT, Claude.
pub fn plan_code_block(source: &CodeBlockSource, config: &CodeBlockConfig) -> CodeBlockPlan {
    let wrapper = source.wrapper_class.as_deref();
    let language = detect_language(&source.code_class, wrapper);
    let code = source.text.as_str();

    let mut tools = Vec::with_capacity(5);
    if config.try_ruby && is_ruby(&source.code_class, wrapper) {
        tools.push(CodeTool {
            kind: ToolKind::TryRuby,
            action: ToolAction::Link(ToolUrl {
                prefix: "https://try.ruby-lang.org/playground/#",
                style: QueryStyle::Component,
                params: vec![("code", code.to_string())],
            }),
        });
    }
    tools.push(CodeTool {
        kind: ToolKind::Share,
        action: ToolAction::Link(share_url(config, code, &language)),
    });
    tools.push(CodeTool {
        kind: ToolKind::Copy,
        action: ToolAction::Copy,
    });
    let prompt = assistant_prompt(config, code);
    tools.push(CodeTool {
        kind: ToolKind::ChatGpt,
        action: ToolAction::Link(ToolUrl {
            prefix: "https://chatgpt.com/?",
            style: QueryStyle::Component,
            params: vec![("q", prompt.clone())],
        }),
    });
    tools.push(CodeTool {
        kind: ToolKind::Claude,
        action: ToolAction::Link(ToolUrl {
            prefix: "https://claude.ai/new?",
            style: QueryStyle::Component,
            params: vec![("q", prompt)],
        }),
    });

    CodeBlockPlan {
        line_count: line_count(&source.inner_html),
        language,
        tools,
    }
}
