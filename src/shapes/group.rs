/// Ordered, duplicate-free list of group names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupIndex {
    names: Vec<String>,
}

impl GroupIndex {
    /// Builds an index from stored names, dropping any repeated entry so the
    /// index never carries duplicates even if the stored document does.
    pub fn new(names: Vec<String>) -> Self {
        let mut index = Self::default();
        for name in names {
            index.add(name);
        }
        index
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn add(&mut self, name: String) -> bool {
        if self.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        before != self.names.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    pub fn into_vec(self) -> Vec<String> {
        self.names
    }
}
