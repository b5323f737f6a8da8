use std::collections::HashMap;

use crate::matcher::model::*;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The ordered switch configurations, looked up by long and short name (in one namespace).
#[derive(Debug, Default)]
pub(crate) struct SwitchIndex {
    configs: Vec<SwitchConfig>,
    names: HashMap<String, usize>,
}

impl SwitchIndex {
    /// Check that `config` can be inserted, without modifying the index.
    pub(crate) fn check(&self, config: &SwitchConfig) -> Result<(), IndexError> {
        if let Some(long) = config.long() {
            if self.names.contains_key(long) {
                return Err(IndexError::DuplicateLong(long.to_string()));
            }
        }

        if let Some(short) = config.short() {
            if self.names.contains_key(&short.to_string()) {
                return Err(IndexError::DuplicateShort(short));
            }
        }

        Ok(())
    }

    /// Insert `config`, returning its position.
    /// Either all of its names are indexed, or (on error) none are.
    pub(crate) fn insert(&mut self, config: SwitchConfig) -> Result<usize, IndexError> {
        self.check(&config)?;
        let position = self.configs.len();

        if let Some(long) = config.long() {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Added long switch \"--{long}\" at {position}.");
            }
            self.names.insert(long.to_string(), position);
        }

        if let Some(short) = config.short() {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Added short switch \"-{short}\" at {position}.");
            }
            self.names.insert(short.to_string(), position);
        }

        self.configs.push(config);
        Ok(position)
    }

    pub(crate) fn get(&self, position: usize) -> &SwitchConfig {
        &self.configs[position]
    }

    fn find(&self, name: &str) -> Option<(usize, &SwitchConfig)> {
        self.names
            .get(name)
            .map(|position| (*position, &self.configs[*position]))
    }

    pub(crate) fn clear(&mut self) {
        self.configs.clear();
        self.names.clear();
    }
}

/// The result of scanning the command line tokens.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Scan {
    /// Raw values for argument-taking switches, in the order each switch was first encountered.
    /// A repeated switch keeps its first position but takes the last value.
    pub values: Vec<(usize, String)>,
    /// Flag switches, in the order encountered.
    pub flags: Vec<usize>,
    pub standalones: Vec<String>,
    pub errors: Vec<String>,
    /// Whether the scan reached the end of the tokens (rather than stopping early).
    pub complete: bool,
}

/// Walks the command line tokens one at a time, classifying each against the [`SwitchIndex`].
pub(crate) struct TokenScanner<'i> {
    index: &'i SwitchIndex,
    switch_ended: bool,
    awaiting: Option<usize>,
    scan: Scan,
}

impl<'i> TokenScanner<'i> {
    pub(crate) fn new(index: &'i SwitchIndex) -> Self {
        Self {
            index,
            switch_ended: false,
            awaiting: None,
            scan: Scan::default(),
        }
    }

    /// Feed the next raw `token`.
    ///
    /// An `Err` means the scan cannot continue (subsequent tokens would be mis-attributed).
    pub(crate) fn feed(&mut self, token: &str) -> Result<(), ScanAbort> {
        // The token following an argument-taking switch is its value, verbatim.
        if let Some(position) = self.awaiting.take() {
            self.record(position, token);
            return Ok(());
        }

        if self.switch_ended {
            self.scan.standalones.push(token.to_string());
            return Ok(());
        }

        match Token::classify(token) {
            Token::Standalone(standalone) => {
                self.scan.standalones.push(standalone.to_string());
                Ok(())
            }
            Token::Terminator => {
                self.switch_ended = true;
                Ok(())
            }
            Token::Long { name, inline } => {
                if name.chars().count() == 1 {
                    return Err(ScanAbort::ShortLongSwitch(name.to_string()));
                }

                self.switch(name, format!("--{name}"), inline)
            }
            Token::Short { name, inline } => {
                let name = name.to_string();
                let typed = format!("-{name}");
                self.switch(&name, typed, inline)
            }
        }
    }

    fn switch(&mut self, name: &str, typed: String, inline: Option<&str>) -> Result<(), ScanAbort> {
        let index = self.index;
        let (position, config) = index.find(name).ok_or(ScanAbort::Undefined(typed))?;
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Scanned switch \"{name}\" (position {position}, inline {inline:?}).");
        }

        if !config.takes_argument() {
            if inline.is_some() {
                self.scan.errors.push(format!(
                    "Switch \"{}\" cannot receive a parameter but specified.",
                    config.display()
                ));
            }

            self.scan.flags.push(position);
            return Ok(());
        }

        if self.scan.values.iter().any(|(p, _)| *p == position) {
            self.scan.errors.push(format!(
                "Switch \"{}\" is specified twice or more.",
                config.display()
            ));
        }

        match inline {
            Some(value) => self.record(position, value),
            None => {
                self.awaiting.replace(position);
            }
        }

        Ok(())
    }

    fn record(&mut self, position: usize, value: &str) {
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Recorded value \"{value}\" at {position}.");
        }

        match self.scan.values.iter_mut().find(|(p, _)| *p == position) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.scan.values.push((position, value.to_string())),
        }
    }

    /// Stop scanning because of `abort`.
    pub(crate) fn abort(self, abort: ScanAbort) -> Scan {
        let TokenScanner { mut scan, .. } = self;
        scan.errors.push(abort.to_string());
        scan.complete = false;
        scan
    }

    /// Finish scanning at the end of the tokens.
    pub(crate) fn close(self) -> Scan {
        match self.awaiting {
            Some(position) => {
                let abort = ScanAbort::MissingParameter(self.index.get(position).display());
                self.abort(abort)
            }
            None => {
                let TokenScanner { mut scan, .. } = self;
                scan.complete = true;
                scan
            }
        }
    }
}
