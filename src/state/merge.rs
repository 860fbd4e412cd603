//! Fold freshly interpreted fragments into the accumulated state map.

use super::{Attr, Resource, StateMap};

/// Merge the fragment `src` into `dest`, reconciling identifier collisions.
///
/// A new identifier is appended at the end of `dest`'s iteration order with
/// its module map taken verbatim. For an identifier already present, each
/// module of the fragment is resolved in turn:
///
/// - the same module name appends into the existing attribute list,
/// - `file.directory` folds into an existing `file.managed` under the same
///   identifier (a chown or chmod on a file that a curl already
///   materialized belongs to the managed-file resource, not to a competing
///   module),
/// - anything else becomes a new module under the existing identifier.
///
/// When appending into an existing list, entries keyed `name` are skipped:
/// the identifier already encodes the target's name (see
/// [`sid::generate`](super::sid::generate)). Existing entries are never
/// reordered; appended
/// entries go to the end of their module's list.
pub fn merge(src: StateMap, dest: &mut StateMap) {
    for (id, resource) in src {
        let Some(existing) = dest.get_mut(&id) else {
            dest.insert(id, resource);
            continue;
        };
        for (module, attrs) in resource.into_modules() {
            if existing.has_module(&module) {
                append_filtered(existing, &module, attrs);
            } else if module == "file.directory" && existing.has_module("file.managed") {
                append_filtered(existing, "file.managed", attrs);
            } else {
                existing.push_module(module, attrs);
            }
        }
    }
}

/// Append `attrs` onto `module`'s existing list, skipping `name` entries.
fn append_filtered(resource: &mut Resource, module: &str, attrs: Vec<Attr>) {
    if let Some(list) = resource.module_mut(module) {
        list.extend(attrs.into_iter().filter(|a| a.key != "name"));
    }
}
