use html5ever::local_name;
use kuchikiki::*;

pub struct FindElements<P> {
    stack: Vec<NodeRef>,
    predicate: P,
}

impl<P> Iterator for FindElements<P>
where
    P: Fn(&ElementData) -> bool,
{
    type Item = NodeRef;

    fn next(&mut self) -> Option<NodeRef> {
        // Grab next node in document order
        while let Some(node) = self.stack.pop() {
            let mut is_match = false;

            if let NodeData::Element(data) = node.data() {
                let predicate = &self.predicate;

                is_match = predicate(data);
            }

            // Push child nodes so the first child is popped next
            let children: Vec<NodeRef> = node.children().collect();
            self.stack.extend(children.into_iter().rev());

            // If the node matched, return it.
            if is_match {
                return Some(node);
            }
        }

        None
    }
}

pub fn find_elements<P>(node: NodeRef, predicate: P) -> FindElements<P>
where
    P: Fn(&ElementData) -> bool,
{
    FindElements {
        stack: vec![node],
        predicate,
    }
}

/// Find the first element in document order whose "id" attribute equals `id`.
pub fn find_element_by_id(node: NodeRef, id: &str) -> Option<NodeRef> {
    find_elements(node, |data: &ElementData| {
        data.attributes.borrow().get(local_name!("id")) == Some(id)
    })
    .next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::*;

    const HTML: &'static str = r###"
    <div id="outer">
        <div id="inner">
            <input id="dup" name="first">
        </div>
        <input id="dup" name="second">
    </div>
    "###;

    fn name_attr(node: &NodeRef) -> Option<String> {
        node.as_element()
            .and_then(|data| data.attributes.borrow().get(local_name!("name")).map(str::to_owned))
    }

    #[test]
    fn finds_elements_in_document_order() {
        let node = parse_string(HTML);

        let ids: Vec<String> = find_elements(node, |data| data.name.local == local_name!("input"))
            .filter_map(|n| name_attr(&n))
            .collect();

        assert_eq!(ids, vec!["first".to_owned(), "second".to_owned()]);
    }

    #[test]
    fn can_find_element_by_id() {
        let node = parse_string(HTML);

        let found = find_element_by_id(node.clone(), "dup").unwrap();
        assert_eq!(name_attr(&found), Some("first".to_owned()));

        assert!(find_element_by_id(node.clone(), "inner").is_some());
        assert!(find_element_by_id(node, "missing").is_none());
    }
}
