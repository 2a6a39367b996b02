//! Folder tree reconstruction from a flat batch of relative paths.

use crate::models::{FileId, TreeNode};

/// Build a folder forest from `(id, relative_path)` pairs.
///
/// Each path is split on `/` and walked segment by segment: an existing
/// sibling with a matching name is descended into, otherwise a new node is
/// appended. A node is a directory iff it is not the final segment of at
/// least one path. Siblings keep first-seen order; the result is
/// deterministic for a deterministic input order.
///
/// Two inputs with the same full path resolve to one leaf whose backing
/// [`FileId`] is the later of the two. A path that needs to descend through
/// an existing *file* node is logged to the console and skipped.
pub fn build_tree<'a, I>(paths: I) -> Vec<TreeNode>
where
    I: IntoIterator<Item = (FileId, &'a str)>,
{
    let mut roots = Vec::new();
    for (id, path) in paths {
        insert_path(&mut roots, id, path);
    }
    roots
}

/// Insert a single path into the forest using iteration instead of recursion.
fn insert_path(roots: &mut Vec<TreeNode>, id: FileId, path: &str) {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        return;
    }
    let last_index = segments.len() - 1;

    let mut current = roots;
    for (i, segment) in segments.iter().enumerate() {
        let level = current;
        let is_last = i == last_index;

        let idx = match level.iter().position(|n| n.name == *segment) {
            Some(idx) => idx,
            None => {
                let node = if is_last {
                    TreeNode::leaf(segment, id)
                } else {
                    TreeNode::directory(segment)
                };
                level.push(node);
                level.len() - 1
            }
        };

        let node = &mut level[idx];
        if is_last {
            if node.is_dir {
                warn_conflict(path);
            } else {
                // Duplicate full path: the latest handle wins the leaf.
                node.file = Some(id);
            }
            return;
        }
        if !node.is_dir {
            // A file occupies a segment the path needs as a directory.
            warn_conflict(path);
            return;
        }
        current = &mut node.children;
    }
}

fn warn_conflict(path: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(
        &format!("Path conflict: \"{}\" blocked by an existing file", path).into(),
    );
    #[cfg(not(target_arch = "wasm32"))]
    let _ = path;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(paths: &[&str]) -> Vec<TreeNode> {
        build_tree(
            paths
                .iter()
                .enumerate()
                .map(|(i, p)| (FileId::new(i), *p)),
        )
    }

    /// Walk the forest back down to its leaf paths.
    fn leaf_paths(nodes: &[TreeNode]) -> Vec<String> {
        fn walk(nodes: &[TreeNode], prefix: &str, out: &mut Vec<String>) {
            for node in nodes {
                let path = if prefix.is_empty() {
                    node.name.clone()
                } else {
                    format!("{}/{}", prefix, node.name)
                };
                if node.is_dir {
                    walk(&node.children, &path, out);
                } else {
                    out.push(path);
                }
            }
        }
        let mut out = Vec::new();
        walk(nodes, "", &mut out);
        out
    }

    #[test]
    fn test_flattening_recovers_input_paths() {
        let paths = [
            "site/index.html",
            "site/css/style.css",
            "site/js/app.js",
            "site/img/logo.png",
            "notes.txt",
        ];
        let tree = build(&paths);

        let mut recovered = leaf_paths(&tree);
        let mut expected: Vec<String> = paths.iter().map(|p| p.to_string()).collect();
        recovered.sort();
        expected.sort();
        assert_eq!(recovered, expected);
    }

    #[test]
    fn test_siblings_keep_first_seen_order() {
        let tree = build(&["b/x.txt", "a/y.txt", "c.txt", "a/z.txt"]);

        let names: Vec<_> = tree.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, ["b", "a", "c.txt"]);

        let a_children: Vec<_> = tree[1].children.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(a_children, ["y.txt", "z.txt"]);
    }

    #[test]
    fn test_build_is_idempotent() {
        let paths = ["a/b/c.txt", "a/b/d.txt", "a/e.txt"];
        assert_eq!(build(&paths), build(&paths));
    }

    #[test]
    fn test_directory_flag_follows_segment_position() {
        let tree = build(&["docs/guide/intro.txt"]);

        assert!(tree[0].is_dir);
        assert!(tree[0].children[0].is_dir);
        let leaf = &tree[0].children[0].children[0];
        assert!(!leaf.is_dir);
        assert_eq!(leaf.file, Some(FileId::new(0)));
        assert!(leaf.children.is_empty());
    }

    #[test]
    fn test_duplicate_full_path_latest_wins() {
        let tree = build(&["a/same.txt", "a/same.txt"]);

        assert_eq!(leaf_paths(&tree), ["a/same.txt"]);
        assert_eq!(tree[0].children[0].file, Some(FileId::new(1)));
    }

    #[test]
    fn test_same_name_in_different_folders_stays_distinct() {
        let tree = build(&["a/index.html", "b/index.html"]);

        let mut recovered = leaf_paths(&tree);
        recovered.sort();
        assert_eq!(recovered, ["a/index.html", "b/index.html"]);
        assert_eq!(tree[0].children[0].file, Some(FileId::new(0)));
        assert_eq!(tree[1].children[0].file, Some(FileId::new(1)));
    }

    #[test]
    fn test_file_blocking_directory_is_skipped() {
        let tree = build(&["data", "data/inner.txt"]);

        // "data" stays a leaf; the blocked path is dropped.
        assert_eq!(leaf_paths(&tree), ["data"]);
        assert!(!tree[0].is_dir);
    }

    #[test]
    fn test_directory_blocking_file_keeps_directory() {
        let tree = build(&["data/inner.txt", "data"]);

        assert_eq!(leaf_paths(&tree), ["data/inner.txt"]);
        assert!(tree[0].is_dir);
        assert_eq!(tree[0].file, None);
    }

    #[test]
    fn test_empty_and_degenerate_paths_are_ignored() {
        assert!(build(&[""]).is_empty());
        assert!(build(&["/"]).is_empty());

        // Leading slash and doubled separators collapse to clean segments.
        let tree = build(&["/a//b.txt"]);
        assert_eq!(leaf_paths(&tree), ["a/b.txt"]);
    }
}
