use crate::vfs::{AssetPlan, PlannedAction};
use colored::Colorize;
use std::path::{Component, Path};

/// Represents a node in the tree (either file or directory).
#[derive(Debug, PartialEq)]
struct TreeNode {
    name: String,
    children: Vec<TreeNode>,
    is_file: bool,
    /// Shown dimmed after the name: the source of a copy, the icon size of a mipmap.
    note: Option<String>,
}
impl TreeNode {
    fn new(name: String, is_file: bool) -> Self {
        Self {
            name,
            children: Vec::new(),
            is_file,
            note: None,
        }
    }

    /// Returns the child called `name`, creating it as a directory when missing.
    fn child_dir(&mut self, name: String) -> &mut TreeNode {
        let position = self.children.iter().position(|child| child.name == name);

        let index = match position {
            Some(index) => index,
            None => {
                self.children.push(TreeNode::new(name, false));
                self.children.len() - 1
            }
        };

        &mut self.children[index]
    }
}

/// Build the directory tree from the plan entries, returning the root node.
///
/// Intermediate directories (e.g. `android/app/src/main/res`) are inferred from the
/// entry paths. Entries outside `root` hang off the root under their full path.
fn build_tree(plan: &AssetPlan, root: &Path) -> TreeNode {
    let root_name = root
        .file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| root.display().to_string());

    let mut tree = TreeNode::new(root_name, false);

    for entry in &plan.entries {
        let relative = entry.destination.strip_prefix(root).ok();

        let segments: Vec<String> = match relative {
            Some(rel) => rel
                .components()
                .filter(|c| !matches!(c, Component::CurDir))
                .map(|c| c.as_os_str().to_string_lossy().to_string())
                .collect(),
            None => vec![entry.destination.display().to_string()],
        };

        let mut node = &mut tree;
        for segment in segments {
            node = node.child_dir(segment);
        }

        node.is_file = entry.is_file();
        node.note = match &entry.action {
            PlannedAction::CopyFrom(source) => Some(format!("<- {}", source.display())),
            PlannedAction::CreateMipmap(density) => {
                Some(format!("{0}x{0}", density.icon_size()))
            }
            PlannedAction::CreateDir => None,
        };
    }

    tree
}

/// Print the tree with a nice ASCII style.
fn print_tree(node: &TreeNode, prefix: &str, is_last: bool) {
    let connector = if is_last {
        "└── ".yellow()
    } else {
        "├── ".yellow()
    };
    let name = if node.is_file {
        node.name.green()
    } else {
        node.name.blue()
    };
    let note = node
        .note
        .as_ref()
        .map(|note| format!(" {}", note.dimmed()))
        .unwrap_or_default();
    println!("{}{}{}{}", prefix.yellow(), connector, name, note);

    let child_prefix = if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    };

    let len = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        let last = i == len - 1;
        print_tree(child, &child_prefix, last);
    }
}

pub fn preview_as_tree(plan: &AssetPlan, root: &Path) {
    let tree_root = build_tree(plan, root);

    println!(
        "Legend: {} = (directory), {} = (file)",
        "blue".blue(),
        "green".green()
    );

    let fancy_prompt = format!(
        "{} {}\n",
        "┌─".bold().bright_blue(),
        "Preview".bold().bright_blue(),
    );

    println!("{}", fancy_prompt);

    print_tree(&tree_root, "", true);

    let fancy_prompt = format!(
        "\n{} {}\n",
        "└─".bold().bright_blue(),
        "Dry run: nothing was written".bright_green()
    );

    println!("{}", fancy_prompt);
}
