//! Receivers: methods see their value through `self`, free functions see
//! only their own arguments and locals. There is no implicit global `this`.

/// No receiver, so the only `name` in scope is the local one.
pub fn full_name() -> String {
    let name = "Foo";
    name.to_string()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Computer {
    ram: u32,
}

impl Computer {
    pub fn new(ram: u32) -> Self {
        Self { ram }
    }

    pub fn ram(&self) -> u32 {
        self.ram
    }

    /// Looks up a property by name. Unknown names give `None` instead of a
    /// silent undefined value; `self.prop` would not compile at all.
    pub fn get(&self, property: &str) -> Option<u32> {
        match property {
            "ram" => Some(self.ram),
            _ => None,
        }
    }
}
