use std::collections::HashMap;

use crate::types::MenuRecord;

/// A menu record together with the records that name it as their parent.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuNode {
    pub record: MenuRecord,
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    pub fn id(&self) -> i64 {
        self.record.id
    }

    pub fn title(&self) -> &str {
        &self.record.title
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Build the menu hierarchy from a flat, already ordered list of records.
///
/// Records whose parent is missing from `records` (or is `0`) are promoted to
/// the root level. Siblings keep the order in which they appear in the input.
/// When an id repeats, the last record with that id wins: every position
/// holding that id shows the last record together with its children.
///
/// Records that only reach each other through their parents (a cycle) have no
/// path from a root and are left out of the result.
pub fn build_tree(records: Vec<MenuRecord>) -> Vec<MenuNode> {
    let index: HashMap<i64, usize> = records
        .iter()
        .enumerate()
        .map(|(pos, record)| (record.id, pos))
        .collect();

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); records.len()];
    let mut roots = Vec::new();

    for record in &records {
        let Some(&pos) = index.get(&record.id) else {
            continue;
        };
        match record
            .parent_id
            .filter(|&parent| parent != 0)
            .and_then(|parent| index.get(&parent))
        {
            Some(&parent) => children[parent].push(pos),
            None => roots.push(pos),
        }
    }

    let mut on_path = vec![false; records.len()];
    let mut reached = vec![false; records.len()];
    let tree: Vec<MenuNode> = roots
        .iter()
        .filter_map(|&pos| assemble(pos, &records, &children, &mut on_path, &mut reached))
        .collect();

    let unreachable = index.values().filter(|&&pos| !reached[pos]).count();
    if unreachable > 0 {
        tracing::debug!("{} menu records are unreachable from a root and were skipped", unreachable);
    }

    tree
}

// A node already on the current path is skipped, so repeated ids that point
// back at an ancestor cannot recurse forever.
fn assemble(
    pos: usize,
    records: &[MenuRecord],
    children: &[Vec<usize>],
    on_path: &mut [bool],
    reached: &mut [bool],
) -> Option<MenuNode> {
    if on_path[pos] {
        return None;
    }
    on_path[pos] = true;
    reached[pos] = true;

    let nested = children[pos]
        .iter()
        .filter_map(|&child| assemble(child, records, children, on_path, reached))
        .collect();

    on_path[pos] = false;

    Some(MenuNode {
        record: records[pos].clone(),
        children: nested,
    })
}
