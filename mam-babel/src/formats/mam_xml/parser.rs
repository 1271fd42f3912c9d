use crate::error::BabelError;
use crate::ir::source::SourceNode;
use roxmltree::Node;

/// Parse an XML document into a [`SourceNode`] tree rooted at the document element.
pub fn parse_to_source(source: &str) -> Result<SourceNode, BabelError> {
    let doc = roxmltree::Document::parse(source)
        .map_err(|e| BabelError::Parse(format!("XML parsing error: {e}")))?;
    Ok(convert_element(doc.root_element()))
}

// Only elements are kept; text lives in the `text` attribute.
fn convert_element(node: Node) -> SourceNode {
    SourceNode {
        tag: node.tag_name().name().to_string(),
        attrs: node
            .attributes()
            .map(|attr| (attr.name().to_string(), attr.value().to_string()))
            .collect(),
        children: node
            .children()
            .filter(|child| child.is_element())
            .map(convert_element)
            .collect(),
    }
}
