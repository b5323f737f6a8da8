use terminal_size::{terminal_size, Width};

use crate::constant::*;
use crate::parser::base::ConfigError;

/// The display-only aspects of a switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SwitchParameter {
    long: Option<String>,
    short: Option<char>,
    type_label: Option<String>,
    help: Option<String>,
}

impl SwitchParameter {
    pub(crate) fn new(
        long: Option<String>,
        short: Option<char>,
        type_label: Option<String>,
        help: Option<String>,
    ) -> Self {
        Self {
            long,
            short,
            type_label,
            help,
        }
    }

    fn head(&self) -> String {
        let mut head = String::default();

        if let Some(short) = &self.short {
            head.push_str(&format!("{SHORT_PREFIX}{short}"));
        }

        if let Some(long) = &self.long {
            if self.short.is_some() {
                head.push_str(", ");
            }

            head.push_str(&format!("{LONG_PREFIX}{long}"));
        }

        if let Some(type_label) = &self.type_label {
            if self.long.is_some() {
                head.push(INLINE_SEPARATOR);
            }

            head.push_str(&format!("[{type_label}]"));
        }

        head.push(':');
        head
    }
}

#[derive(Debug)]
pub(crate) struct Printer {
    program: String,
    parameters: Vec<SwitchParameter>,
    label: String,
}

impl Printer {
    pub(crate) fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            parameters: Vec::default(),
            label: String::default(),
        }
    }

    pub(crate) fn program(&self) -> &str {
        &self.program
    }

    pub(crate) fn push(&mut self, parameter: SwitchParameter) {
        self.parameters.push(parameter);
    }

    pub(crate) fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub(crate) fn clear(&mut self) {
        self.parameters.clear();
    }

    /// The display width of the terminal, when there is one.
    pub(crate) fn terminal_width() -> usize {
        match terminal_size() {
            Some((Width(width), _)) if width as usize > DEFAULT_TAB_WIDTH => width as usize,
            _ => DEFAULT_DISPLAY_WIDTH,
        }
    }

    pub(crate) fn render(&self, display_width: usize, tab_width: usize) -> Result<String, ConfigError> {
        if display_width <= tab_width {
            return Err(ConfigError(format!(
                "Usage display width ({display_width}) must be larger than the tab width ({tab_width})."
            )));
        }

        let indent = format!("{:tab_width$}", "");
        let wrap_width = display_width - tab_width;
        let mut out = format!("Usage: {} [OPTIONS]", self.program);

        if !self.label.is_empty() {
            out.push(' ');
            out.push_str(&self.label);
        }

        out.push_str("\n[OPTIONS] are:\n");

        for parameter in &self.parameters {
            let head = parameter.head();
            let lines: Vec<String> = match &parameter.help {
                Some(help) => help
                    .split('\n')
                    .flat_map(|paragraph| {
                        let lines = chunk(paragraph, wrap_width);
                        if lines.is_empty() {
                            vec![String::default()]
                        } else {
                            lines
                        }
                    })
                    .collect(),
                None => Vec::default(),
            };

            out.push_str(&head);

            match lines.split_first() {
                None => {}
                Some((first, rest)) => {
                    let head_width = head.chars().count();

                    if head_width < tab_width {
                        out.push_str(&format!("{:width$}", "", width = tab_width - head_width));
                    } else {
                        out.push('\n');
                        out.push_str(&indent);
                    }

                    out.push_str(first);

                    for line in rest {
                        out.push('\n');
                        out.push_str(&indent);
                        out.push_str(line);
                    }
                }
            }

            out.push('\n');
        }

        Ok(out)
    }
}

fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ') {
        if !word.is_empty() {
            if current.is_empty() {
                hyphenate(width, &mut lines, &mut current, word);
            } else if current.chars().count() + word.chars().count() + 1 <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(current);
                current = String::default();
                hyphenate(width, &mut lines, &mut current, word);
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let chars: Vec<char> = word.chars().collect();
    // A single column has no room for the hyphen.
    let (increment, hyphen) = if width >= 2 { (width - 1, "-") } else { (1, "") };
    let mut left = 0;

    while left + width < chars.len() {
        let part: String = chars[left..left + increment].iter().collect();
        lines.push(format!("{part}{hyphen}"));
        left += increment;
    }

    current.extend(&chars[left..]);
}
