use pdf_writer::Ref;
use std::collections::HashMap;

#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub enum RefType {
    Catalog,
    Info,
    PageTree,
    Page(usize),
    ContentForPage(usize),
    Font(usize),
    Image(usize),
    ImageMask(usize),
    Outlines,
    OutlineEntry(usize),
}

/// Hands out PDF object references and remembers which object each one belongs to
pub struct ObjectReferences {
    refs: HashMap<RefType, Ref>,
    next_id: i32,
}

impl ObjectReferences {
    pub fn new() -> ObjectReferences {
        ObjectReferences {
            refs: HashMap::new(),
            next_id: 1,
        }
    }

    /// Allocate a reference that isn't tracked by type, i.e. for objects pulled in
    /// from other chunks such as converted SVGs
    pub fn bump(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    pub fn get(&self, ref_type: RefType) -> Option<Ref> {
        self.refs.get(&ref_type).copied()
    }

    pub fn gen(&mut self, ref_type: RefType) -> Ref {
        let id = self.bump();
        self.refs.insert(ref_type, id);
        id
    }

    /// Record a reference allocated elsewhere (see [ObjectReferences::bump])
    pub fn set(&mut self, ref_type: RefType, id: Ref) {
        self.refs.insert(ref_type, id);
    }

    /// Returns the existing reference for `ref_type`, generating one if needed
    pub fn get_or_gen(&mut self, ref_type: RefType) -> Ref {
        match self.get(ref_type) {
            Some(id) => id,
            None => self.gen(ref_type),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn references_are_unique_and_stable() {
        let mut refs = ObjectReferences::new();
        let catalog = refs.gen(RefType::Catalog);
        let page = refs.get_or_gen(RefType::Page(0));
        assert_ne!(catalog, page);
        assert_eq!(refs.get_or_gen(RefType::Page(0)), page);
        assert_ne!(refs.bump(), page);
        assert_eq!(refs.get(RefType::Image(3)), None);
    }
}
