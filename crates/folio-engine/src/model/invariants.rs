use crate::model::{Document, ElementKind, Node, NodePath};

/// First structural violation found in a document tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantError {
    #[error("{parent} at {path} may not contain {found}")]
    UnexpectedChild {
        path: NodePath,
        parent: &'static str,
        found: &'static str,
    },
    #[error("table at {path} is not rectangular: row {row} has {found} cells, expected {expected}")]
    RaggedTable {
        path: NodePath,
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("{kind} at {path} has no children")]
    EmptyContainer { path: NodePath, kind: &'static str },
}

pub fn check(doc: &Document) -> Result<(), InvariantError> {
    for (index, node) in doc.blocks().iter().enumerate() {
        check_node(node, &NodePath::from([index]))?;
    }
    Ok(())
}

fn check_node(node: &Node, path: &NodePath) -> Result<(), InvariantError> {
    let Node::Element(element) = node else {
        return Ok(());
    };

    if element.children.is_empty() {
        return Err(InvariantError::EmptyContainer {
            path: path.clone(),
            kind: element.kind.name(),
        });
    }

    let required = match element.kind {
        ElementKind::Table => Some(ElementKind::TableRow),
        ElementKind::TableRow => Some(ElementKind::TableCell),
        ElementKind::OrderedList | ElementKind::UnorderedList => Some(ElementKind::ListItem),
        _ => None,
    };
    if let Some(required) = required {
        for child in &element.children {
            if child.kind() != Some(&required) {
                return Err(InvariantError::UnexpectedChild {
                    path: path.clone(),
                    parent: element.kind.name(),
                    found: child.kind().map_or("text", ElementKind::name),
                });
            }
        }
    }

    if element.kind == ElementKind::Table {
        let expected = element.children[0].children().len();
        for (row, child) in element.children.iter().enumerate() {
            let found = child.children().len();
            if found != expected {
                return Err(InvariantError::RaggedTable {
                    path: path.clone(),
                    row,
                    expected,
                    found,
                });
            }
        }
    }

    for (index, child) in element.children.iter().enumerate() {
        check_node(child, &path.child(index))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Element, TextRun};
    use crate::tests::sample_document;

    #[test]
    fn test_sample_document_is_valid() {
        assert_eq!(sample_document().check_invariants(), Ok(()));
    }

    #[test]
    fn test_ragged_table_is_reported() {
        let mut doc = sample_document();
        doc.children_mut(&NodePath::from([1, 1]))
            .unwrap()
            .push(Element::table_cell().into());

        let err = doc.check_invariants().unwrap_err();
        assert_eq!(
            err,
            InvariantError::RaggedTable {
                path: NodePath::from([1]),
                row: 1,
                expected: 2,
                found: 3,
            }
        );
        assert_eq!(
            err.to_string(),
            "table at [1] is not rectangular: row 1 has 3 cells, expected 2"
        );
    }

    #[test]
    fn test_list_children_must_be_items() {
        let doc = Document::new(vec![
            Element::new(
                ElementKind::UnorderedList,
                vec![Element::paragraph([TextRun::new("x")]).into()],
            )
            .into(),
        ]);

        assert!(matches!(
            doc.check_invariants(),
            Err(InvariantError::UnexpectedChild {
                parent: "unorderedList",
                found: "paragraph",
                ..
            })
        ));
    }

    #[test]
    fn test_text_directly_in_row_is_rejected() {
        let doc = Document::new(vec![
            Element::new(
                ElementKind::Table,
                vec![Element::new(ElementKind::TableRow, vec![TextRun::new("x").into()]).into()],
            )
            .into(),
        ]);

        assert!(matches!(
            doc.check_invariants(),
            Err(InvariantError::UnexpectedChild { found: "text", .. })
        ));
    }

    #[test]
    fn test_empty_container_is_reported() {
        let doc = Document::new(vec![Element::new(ElementKind::Blockquote, vec![]).into()]);
        assert_eq!(
            doc.check_invariants(),
            Err(InvariantError::EmptyContainer {
                path: NodePath::from([0]),
                kind: "blockquote",
            })
        );
    }
}
