use serde::{Deserialize, Serialize};

/// A block or page in the Roam import format.
///
/// Pages carry a `title`, blocks carry a `string`. Leaf blocks omit `children`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OutlineNode {
    pub create_email: String,
    pub create_time: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<OutlineNode>,
    pub uid: String,
    pub edit_time: i64,
    pub edit_email: String,
}

impl OutlineNode {
    /// Iterate over this node and all of its descendants, depth first
    pub fn walk(&self) -> Vec<&OutlineNode> {
        let mut nodes = vec![self];
        for child in &self.children {
            nodes.extend(child.walk());
        }
        nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn leaf() -> OutlineNode {
        OutlineNode {
            create_email: "me@example.com".to_string(),
            create_time: 1000,
            title: None,
            string: Some("# Hi".to_string()),
            children: Vec::new(),
            uid: "leafuid01".to_string(),
            edit_time: 2000,
            edit_email: "me@example.com".to_string(),
        }
    }

    #[test]
    fn test_leaf_serializes_without_children_or_title() {
        let value = serde_json::to_value(leaf()).unwrap();
        assert_eq!(
            value,
            json!({
                "create-email": "me@example.com",
                "create-time": 1000,
                "string": "# Hi",
                "uid": "leafuid01",
                "edit-time": 2000,
                "edit-email": "me@example.com",
            })
        );
    }

    #[test]
    fn test_walk_visits_descendants() {
        let mut root = leaf();
        root.uid = "root".to_string();
        let mut mid = leaf();
        mid.uid = "mid".to_string();
        mid.children.push(leaf());
        root.children.push(mid);

        let uids: Vec<&str> = root.walk().iter().map(|n| n.uid.as_str()).collect();
        assert_eq!(uids, vec!["root", "mid", "leafuid01"]);
    }
}
