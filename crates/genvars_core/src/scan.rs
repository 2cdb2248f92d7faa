//! Object reference discovery for dependency tracking.
//!
//! Walks a value and its nested aggregate fields and container elements with
//! an explicit stack, collecting the soft path of every non-null object
//! reference in first-seen order. Allowlisted plain aggregates hold no
//! references and are not entered.

use genvars_foundation::{Reflect, SoftObjectPath};

use crate::classify::Classifier;

/// Appends the soft paths referenced by `root` to `out`, skipping duplicates.
pub fn collect_references(root: &dyn Reflect, classifier: &Classifier, out: &mut Vec<SoftObjectPath>) {
    let mut stack: Vec<&dyn Reflect> = vec![root];
    while let Some(value) = stack.pop() {
        if let Some(path) = value.soft_reference() {
            if !out.contains(&path) {
                out.push(path);
            }
            continue;
        }
        if let Some(desc) = value.type_desc().as_struct() {
            if classifier.is_plain_struct(desc) {
                continue;
            }
        }
        let mark = stack.len();
        value.visit_children(&mut |child| stack.push(child));
        stack[mark..].reverse();
    }
}
