//! Full-name/short-name symbol index and the package-based disambiguation
//! rule (§4.3), grounded on `python_adapter.py`'s `_add_relationship_edges`
//! (`resolve_type`/`_pkg`).

use cir_lang::Unit;
use std::collections::HashMap;

pub struct SymbolIndex {
    full_to_id: HashMap<String, String>,
    short_to_ids: HashMap<String, Vec<String>>,
    id_to_full: HashMap<String, String>,
}

fn package_of(full_name: &str) -> &str {
    match full_name.rfind('.') {
        Some(idx) => &full_name[..idx],
        None => "",
    }
}

impl SymbolIndex {
    pub fn build(units: &[Unit]) -> Self {
        let mut full_to_id = HashMap::new();
        let mut id_to_full = HashMap::new();
        let mut short_to_ids: HashMap<String, Vec<String>> = HashMap::new();

        for unit in units {
            full_to_id.insert(unit.full_name.clone(), unit.type_id.clone());
            id_to_full.insert(unit.type_id.clone(), unit.full_name.clone());
            short_to_ids
                .entry(unit.short_name.clone())
                .or_default()
                .push(unit.type_id.clone());
        }

        Self {
            full_to_id,
            short_to_ids,
            id_to_full,
        }
    }

    /// Resolve a surface type name to a type id, from the perspective of
    /// `src_id` (used to disambiguate same-short-name types by package).
    ///
    /// 1. exact full-name match
    /// 2. unique short-name match
    /// 3. same-package short-name match, if unique
    /// 4. unresolved
    pub fn resolve(&self, name: &str, src_id: &str) -> Option<&str> {
        if let Some(id) = self.full_to_id.get(name) {
            return Some(id.as_str());
        }

        let candidates = self.short_to_ids.get(name)?;
        if candidates.len() == 1 {
            return Some(candidates[0].as_str());
        }

        let src_full = self.id_to_full.get(src_id).map(String::as_str).unwrap_or("");
        let src_pkg = package_of(src_full);
        let same_pkg: Vec<&str> = candidates
            .iter()
            .filter(|c| package_of(self.id_to_full.get(c.as_str()).map(String::as_str).unwrap_or("")) == src_pkg)
            .map(String::as_str)
            .collect();

        if same_pkg.len() == 1 {
            Some(same_pkg[0])
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cir_core::{TypeDecl, TypeKind, Visibility};

    fn unit(full_name: &str, short: &str, pkg: Option<&str>) -> Unit {
        let type_decl = TypeDecl {
            id: format!("type:{full_name}"),
            name: short.to_string(),
            kind: TypeKind::Class,
            visibility: Visibility::Public,
            package: pkg.map(String::from),
            modifiers: vec![],
            is_abstract: false,
            is_final: false,
        };
        Unit::new(type_decl, pkg.map(String::from), format!("{short}.src"))
    }

    #[test]
    fn resolves_unique_short_name() {
        let units = vec![unit("shop.Order", "Order", Some("shop"))];
        let index = SymbolIndex::build(&units);
        assert_eq!(index.resolve("Order", "type:shop.Order"), Some("type:shop.Order"));
    }

    #[test]
    fn disambiguates_by_same_package() {
        let units = vec![
            unit("shop.Item", "Item", Some("shop")),
            unit("catalog.Item", "Item", Some("catalog")),
            unit("shop.Order", "Order", Some("shop")),
        ];
        let index = SymbolIndex::build(&units);
        assert_eq!(index.resolve("Item", "type:shop.Order"), Some("type:shop.Item"));
    }

    #[test]
    fn ambiguous_cross_package_short_name_unresolved() {
        let units = vec![
            unit("shop.Item", "Item", Some("shop")),
            unit("catalog.Item", "Item", Some("catalog")),
        ];
        let index = SymbolIndex::build(&units);
        assert_eq!(index.resolve("Item", "type:other.Thing"), None);
    }
}
