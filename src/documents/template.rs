use tree_sitter::{Node, Parser};

/// One `tag`-tagged template literal found in a JS/TS source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TaggedTemplate {
    pub(crate) content: String,
    pub(crate) line: usize,
}

/// What came out of scanning a source file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct TemplateScan {
    pub(crate) templates: Vec<TaggedTemplate>,
    /// Lines of templates skipped for containing `${}` substitutions.
    pub(crate) interpolated: Vec<usize>,
}

/// Finds every template literal tagged with `tag_name` in `source`.
///
/// The TSX grammar is used for every JS flavour since it accepts all of them.
pub(crate) fn scan_tagged_templates(source: &str, tag_name: &str) -> TemplateScan {
    let mut scan = TemplateScan::default();
    let mut parser = Parser::new();
    if parser
        .set_language(&tree_sitter_typescript::LANGUAGE_TSX.into())
        .is_err()
    {
        return scan;
    }
    let Some(tree) = parser.parse(source, None) else {
        return scan;
    };

    let mut stack = vec![tree.root_node()];
    while let Some(node) = stack.pop() {
        // children are pushed in reverse so templates come out in source order
        let mut cursor = node.walk();
        let children = node.children(&mut cursor).collect::<Vec<_>>();
        stack.extend(children.into_iter().rev());

        if node.kind() != "call_expression" {
            continue;
        }
        let Some(template) = tagged_template(source, &node, tag_name) else {
            continue;
        };
        let line = template.start_position().row + 1;
        if has_substitution(&template) {
            scan.interpolated.push(line);
            continue;
        }
        if let Ok(text) = template.utf8_text(source.as_bytes()) {
            scan.templates.push(TaggedTemplate {
                content: text.trim_matches('`').to_string(),
                line,
            });
        }
    }
    scan
}

fn tagged_template<'a>(source: &str, node: &Node<'a>, tag_name: &str) -> Option<Node<'a>> {
    let function = node.child_by_field_name("function")?;
    let tag = function.utf8_text(source.as_bytes()).ok()?;
    if tag.trim() != tag_name {
        return None;
    }
    let arguments = node.child_by_field_name("arguments")?;
    (arguments.kind() == "template_string").then_some(arguments)
}

fn has_substitution(template: &Node<'_>) -> bool {
    let mut cursor = template.walk();
    let found = template
        .children(&mut cursor)
        .any(|child| child.kind() == "template_substitution");
    found
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn it_finds_gql_templates_in_order() {
        let source = r#"
        import gql from "graphql-tag";
        const first = gql`
          query First { a }
        `;
        const second = gql`query Second { b }`;
        "#;

        let scan = scan_tagged_templates(source, "gql");
        assert_eq!(scan.templates.len(), 2);
        assert!(scan.templates[0].content.contains("query First"));
        assert_eq!(scan.templates[1].content, "query Second { b }");
        assert_eq!(scan.templates[1].line, 6);
    }

    #[test]
    fn it_only_takes_the_requested_tag() {
        let source = "const a = gql`query A { a }`; const b = graphql`query B { b }`;";

        let scan = scan_tagged_templates(source, "graphql");
        assert_eq!(scan.templates.len(), 1);
        assert_eq!(scan.templates[0].content, "query B { b }");
    }

    #[test]
    fn it_skips_interpolated_templates() {
        let source = "const q = gql`query User { user(id: ${id}) { id } }`;";

        let scan = scan_tagged_templates(source, "gql");
        assert!(scan.templates.is_empty());
        assert_eq!(scan.interpolated, vec![1]);
    }

    #[test]
    fn it_handles_tsx() {
        let source = r#"
        const Q = gql`query Q { q }`;
        export const View = (): JSX.Element => <div>{String(Q)}</div>;
        "#;

        assert_eq!(scan_tagged_templates(source, "gql").templates.len(), 1);
    }

    #[test]
    fn untagged_templates_are_ignored() {
        assert!(scan_tagged_templates("const s = `query Q { q }`;", "gql")
            .templates
            .is_empty());
    }
}
