//! Shared behaviour through a trait instead of a base class.

pub trait Speaker {
    fn name(&self) -> &str;

    fn speak(&self) -> String {
        format!("{} makes a sound", self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Animal {
    name: String,
}

impl Animal {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Speaker for Animal {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dog {
    name: String,
}

impl Dog {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Speaker for Dog {
    fn name(&self) -> &str {
        &self.name
    }

    fn speak(&self) -> String {
        format!("{} barks", self.name)
    }
}

/// Dynamic dispatch: each speaker picks its own `speak`.
pub fn chorus(speakers: &[&dyn Speaker]) -> Vec<String> {
    speakers.iter().map(|s| s.speak()).collect()
}
