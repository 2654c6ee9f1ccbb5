use std::collections::BTreeMap;

/// Group changed paths by their base directory.
///
/// Each path is split on its first separator: `src/git/mod.rs` lands under
/// `src` as `git/mod.rs`, while root-level files land under the `"."` key.
/// The `BTreeMap` iterates keys in ascending lexicographic order; names
/// within each group are sorted before returning.
pub fn group_files_by_directory(files: &[String]) -> BTreeMap<String, Vec<String>> {
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for file in files {
        let (key, name) = match file.split_once('/') {
            Some((dir, rest)) => (dir.to_string(), rest.to_string()),
            None => (".".to_string(), file.clone()),
        };
        grouped.entry(key).or_default().push(name);
    }

    for names in grouped.values_mut() {
        names.sort();
    }

    grouped
}
