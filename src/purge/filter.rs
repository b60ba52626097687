use regex::Regex;

/// Include/exclude name patterns applied to a resource's primary display
/// name. Exclude always wins over include.
#[derive(Debug, Clone, Default)]
pub struct NameFilter {
    include: Option<Regex>,
    exclude: Option<Regex>,
}

impl NameFilter {
    pub fn new(include: Option<Regex>, exclude: Option<Regex>) -> Self {
        Self { include, exclude }
    }

    pub fn matches(&self, name: &str) -> bool {
        if let Some(exclude) = &self.exclude {
            if exclude.is_match(name) {
                return false;
            }
        }
        if let Some(include) = &self.include {
            if !include.is_match(name) {
                return false;
            }
        }
        true
    }
}
