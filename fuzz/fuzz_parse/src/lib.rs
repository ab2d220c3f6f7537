use simple_json::Document;

pub fn de(input: &[u8]) {
    // Make sure we don't panic when reading documents
    let doc = match Document::try_parse(input) {
        Ok(doc) => doc,
        Err(_) => {
            // The infallible parser falls back to `null`
            assert!(Document::parse(input).is_null());
            return;
        }
    };

    // Anything we accept must survive being written and read back
    let written = doc.to_json_string();
    let reread = Document::try_parse(&written).expect("failed to re-read written document");

    assert_eq!(doc, reread);
    assert_eq!(written, reread.to_json_string());

    // Anything we write must be acceptable to other parsers too
    // `serde_json` refuses to recurse past a fixed depth, so only check shallow documents
    if depth(&doc) < 100 {
        if let Err(e) = serde_json::from_str::<serde_json::Value>(&written) {
            panic!("`{}` was rejected by serde_json: {}", written, e);
        }

        // Converting to a `serde_json::Value` keeps the same content
        let converted =
            serde_json::to_string(&doc.to_value()).expect("failed to write converted value");
        let reread = Document::try_parse(&converted).expect("failed to re-read converted value");

        assert_eq!(doc, reread);
    }

    // Clones are independent of the original
    let mut copy = doc.clone();
    copy.push(true);
    assert_eq!(doc, reread);
}

fn depth(doc: &Document) -> usize {
    let mut max = 0;
    let mut pending = vec![(doc, 0)];

    while let Some((doc, depth)) = pending.pop() {
        max = max.max(depth);

        if let Ok(array) = doc.as_array() {
            pending.extend(array.iter().map(|v| (v, depth + 1)));
        } else if let Ok(object) = doc.as_object() {
            pending.extend(object.values().map(|v| (v, depth + 1)));
        }
    }

    max
}
