//! Iterator
//!
//! `NameRepository` hands out fresh `Names` cursors. Each cursor walks the
//! backing list front to back exactly once; asking again starts over.

use std::io::Write;

use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRepository {
    names: Vec<String>,
}

impl NameRepository {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        NameRepository {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn iter(&self) -> Names<'_> {
        Names {
            names: &self.names,
            position: 0,
        }
    }
}

impl Default for NameRepository {
    fn default() -> Self {
        NameRepository::new(["Robert", "John", "Julie", "Lora"])
    }
}

/// Forward-only cursor over a repository.
#[derive(Debug, Clone)]
pub struct Names<'a> {
    names: &'a [String],
    position: usize,
}

impl<'a> Iterator for Names<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.names.get(self.position)?;
        self.position += 1;
        Some(name.as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.names.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Names<'_> {}

impl<'a> IntoIterator for &'a NameRepository {
    type Item = &'a str;
    type IntoIter = Names<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub fn demo(out: &mut dyn Write) -> Result<()> {
    let repository = NameRepository::default();
    for name in &repository {
        writeln!(out, "Name: {name}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order() {
        let repository = NameRepository::default();
        let names: Vec<&str> = repository.iter().collect();
        assert_eq!(names, vec!["Robert", "John", "Julie", "Lora"]);
    }

    #[test]
    fn test_traversals_are_independent() {
        let repository = NameRepository::new(["a", "b", "c"]);
        let mut first = repository.iter();
        assert_eq!(first.next(), Some("a"));

        let second: Vec<&str> = repository.iter().collect();
        assert_eq!(second, vec!["a", "b", "c"]);
        assert_eq!(first.len(), 2);
        assert_eq!(first.collect::<Vec<_>>(), vec!["b", "c"]);
    }

    #[test]
    fn test_cursor_is_finite() {
        let repository = NameRepository::new(Vec::<String>::new());
        let mut names = repository.iter();
        assert_eq!(names.next(), None);
        assert_eq!(names.next(), None);
    }

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        demo(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Name: Robert\nName: John\nName: Julie\nName: Lora\n"
        );
    }
}
