use std::{
    collections::{BTreeMap, BTreeSet},
    str::FromStr,
};

use crate::errors::CliError;

/// Command arguments split into positionals, `--flag value` options and switches.
#[derive(Debug, Default)]
pub struct ArgList {
    positionals: Vec<String>,
    values: BTreeMap<String, String>,
    switches: BTreeSet<String>,
}

impl ArgList {
    /// Accepts `--flag value` and `--flag=value` for `value_flags`; anything else
    /// starting with `--` must be one of `switch_flags`.
    pub fn parse(
        args: &[String],
        value_flags: &[&str],
        switch_flags: &[&str],
    ) -> Result<Self, CliError> {
        let mut list = ArgList::default();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            if !arg.starts_with("--") {
                list.positionals.push(arg.clone());
                continue;
            }
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) => (flag, Some(value.to_string())),
                None => (arg.as_str(), None),
            };
            if value_flags.contains(&flag) {
                let value = match inline {
                    Some(value) => value,
                    None => iter
                        .next()
                        .cloned()
                        .ok_or_else(|| CliError::Usage(format!("{flag} expects a value")))?,
                };
                list.values.insert(flag.to_string(), value);
            } else if switch_flags.contains(&flag) && inline.is_none() {
                list.switches.insert(flag.to_string());
            } else {
                return Err(CliError::Usage(format!("unknown option `{arg}`")));
            }
        }
        Ok(list)
    }

    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }

    pub fn positional(&self, index: usize) -> Option<&str> {
        self.positionals.get(index).map(String::as_str)
    }

    pub fn value(&self, flag: &str) -> Option<&str> {
        self.values.get(flag).map(String::as_str)
    }

    pub fn parsed<T: FromStr>(&self, flag: &str) -> Result<Option<T>, CliError> {
        self.value(flag)
            .map(|raw| {
                raw.parse::<T>()
                    .map_err(|_| CliError::Usage(format!("invalid value for {flag}: `{raw}`")))
            })
            .transpose()
    }

    pub fn switch(&self, flag: &str) -> bool {
        self.switches.contains(flag)
    }
}
