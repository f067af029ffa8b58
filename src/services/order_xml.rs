//! Serialization of direct orders into the `PesapalDirectOrderInfo` document.

use crate::models::{LineItem, Params};
use crate::utils::{escape_html, escape_xml_attribute};
use std::collections::BTreeMap;

pub const ROOT_ELEMENT: &str = "PesapalDirectOrderInfo";
pub const LINE_ITEMS_ELEMENT: &str = "LineItems";
pub const LINE_ITEM_ELEMENT: &str = "LineItem";

const NAMESPACE_ATTRIBUTES: [(&str, &str); 3] = [
    ("xmlns", "http://www.pesapal.com"),
    ("xmlns:xsd", "http://www.w3.org/2001/XMLSchema"),
    ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
];

/// Build the order document
///
/// The root carries the namespace declarations and one attribute per order
/// field. A `LineItems` child is only emitted when there is at least one item.
pub fn build_order_xml(fields: &Params, line_items: &[LineItem]) -> String {
    let mut attributes: BTreeMap<&str, &str> = fields
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    for (key, value) in NAMESPACE_ATTRIBUTES {
        attributes.insert(key, value);
    }

    let mut xml = String::new();
    open_tag(&mut xml, ROOT_ELEMENT, attributes);

    if line_items.is_empty() {
        xml.push_str(" />");
        return xml;
    }

    xml.push('>');
    xml.push('<');
    xml.push_str(LINE_ITEMS_ELEMENT);
    xml.push('>');
    for item in line_items {
        open_tag(&mut xml, LINE_ITEM_ELEMENT, item.attributes());
        xml.push_str(" />");
    }
    xml.push_str(&format!("</{LINE_ITEMS_ELEMENT}></{ROOT_ELEMENT}>"));
    xml
}

/// The order document, HTML-escaped for use as `pesapal_request_data`
pub fn encode_request_data(fields: &Params, line_items: &[LineItem]) -> String {
    escape_html(&build_order_xml(fields, line_items))
}

fn open_tag<K, V>(xml: &mut String, name: &str, attributes: impl IntoIterator<Item = (K, V)>)
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    xml.push('<');
    xml.push_str(name);
    for (key, value) in attributes {
        xml.push_str(&format!(
            " {}=\"{}\"",
            key.as_ref(),
            escape_xml_attribute(value.as_ref())
        ));
    }
}
