//! Getters and setters.

#[derive(Debug, Clone, PartialEq)]
pub struct Human {
    name: String,
    last_name: String,
}

impl Default for Human {
    // The last name starts as a single space, so an untouched `Human` has a
    // two-space full name.
    fn default() -> Self {
        Self {
            name: String::new(),
            last_name: " ".to_string(),
        }
    }
}

impl Human {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.last_name = value.into();
    }

    // Derived, no backing field.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.last_name)
    }
}
