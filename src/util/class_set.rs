//! CSS class deltas produced by the state models.
//!
//! A `ClassSet` says which classes an element must carry and which it must
//! not. Applying one is idempotent, so a view can be re-synced at any time.

#[cfg(test)]
#[path = "class_set_test.rs"]
mod class_set_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassSet {
    pub add: Vec<&'static str>,
    pub remove: Vec<&'static str>,
}

impl ClassSet {
    pub fn new(add: &[&'static str], remove: &[&'static str]) -> Self {
        Self {
            add: add.to_vec(),
            remove: remove.to_vec(),
        }
    }

    /// Resulting class list when applied to `current`.
    pub fn apply_to(&self, current: &[&str]) -> Vec<String> {
        let mut out: Vec<String> = current
            .iter()
            .filter(|class| !self.remove.iter().any(|removed| *removed == **class))
            .map(|class| (*class).to_owned())
            .collect();
        for class in &self.add {
            if !out.iter().any(|existing| existing.as_str() == *class) {
                out.push((*class).to_owned());
            }
        }
        out
    }
}
