//! Ordered element tree of a YIN document
//!
//! Children are kept in a `Vec` in the order they appear in the source, so
//! every traversal over the tree yields nodes in document order.

use std::slice;

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::reader::NsReader;

use super::SchemaError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    namespace: Option<String>,
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(namespace: Option<&str>, name: &str) -> Self {
        Element {
            namespace: namespace.map(Into::into),
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Local name, without any prefix
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is(&self, namespace: &str, name: &str) -> bool {
        self.namespace() == Some(namespace) && self.name == name
    }

    pub fn children(&self) -> slice::Iter<'_, Element> {
        self.children.iter()
    }

    pub fn children_named<'a>(
        &'a self,
        namespace: &'a str,
        name: &'a str,
    ) -> impl Iterator<Item = &'a Element> + 'a {
        self.children().filter(move |c| c.is(namespace, name))
    }

    /// Pre-order walk over everything below this element
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: vec![self.children()],
        }
    }

    fn from_start(namespace: ResolveResult, start: &BytesStart) -> Result<Self, SchemaError> {
        let namespace = match namespace {
            ResolveResult::Bound(ns) => Some(String::from_utf8_lossy(ns.as_ref()).into_owned()),
            ResolveResult::Unbound => None,
            ResolveResult::Unknown(prefix) => {
                return Err(SchemaError::UnknownPrefix(
                    String::from_utf8_lossy(&prefix).into_owned(),
                ))
            }
        };
        let mut element = Element {
            namespace,
            name: String::from_utf8_lossy(start.local_name().as_ref()).into_owned(),
            attributes: Vec::new(),
            children: Vec::new(),
        };
        for attr in start.attributes() {
            let attr = attr?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            element.attributes.push((key, value));
        }
        Ok(element)
    }
}

pub struct Descendants<'a> {
    stack: Vec<slice::Iter<'a, Element>>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<&'a Element> {
        loop {
            let siblings = self.stack.last_mut()?;
            match siblings.next() {
                Some(element) => {
                    self.stack.push(element.children());
                    return Some(element);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Immutable, parsed data model
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaModel {
    root: Element,
}

impl SchemaModel {
    pub fn new(root: Element) -> Self {
        SchemaModel { root }
    }

    pub fn parse(xml: &str) -> Result<Self, SchemaError> {
        let mut reader = NsReader::from_str(xml);
        let mut open: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_resolved_event()? {
                (ns, Event::Start(start)) => open.push(Element::from_start(ns, &start)?),
                (ns, Event::Empty(start)) => {
                    let element = Element::from_start(ns, &start)?;
                    attach(&mut open, &mut root, element)?;
                }
                (_, Event::End(_)) => {
                    let element = open.pop().ok_or(SchemaError::Structure(
                        "closing tag without matching opening tag",
                    ))?;
                    attach(&mut open, &mut root, element)?;
                }
                (_, Event::Eof) => break,
                _ => {}
            }
        }

        if !open.is_empty() {
            return Err(SchemaError::Structure("document ended inside an element"));
        }
        root.map(SchemaModel::new)
            .ok_or(SchemaError::Structure("document has no root element"))
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Every element of the document, root first, in document order
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        std::iter::once(&self.root).chain(self.root.descendants())
    }
}

fn attach(
    open: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), SchemaError> {
    match open.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => return Err(SchemaError::Structure("document has more than one root element")),
    }
    Ok(())
}
