/*!
Indexing into documents with `doc["key"]` and `doc[index]`.

Reading through an index never fails: a missing key, an out-of-bounds index, or a
document of the wrong kind all produce `null`.

Writing through an index creates whatever is needed to make the assignment work.
A document that isn't an object becomes an empty object when indexed by a key, and a
document that isn't an array becomes an array of `null`s when indexed by a position.
Arrays that are too short are padded with `null`s.
*/

use std::ops::{Index, IndexMut};

use super::{value::null_document, Document};

impl<'a> Index<&'a str> for Document {
    type Output = Document;

    #[inline]
    fn index(&self, key: &'a str) -> &Document {
        self.get(key).unwrap_or_else(|| null_document())
    }
}

impl<'a> IndexMut<&'a str> for Document {
    fn index_mut(&mut self, key: &'a str) -> &mut Document {
        self.vivify_object()
            .entry(key.to_owned())
            .or_insert_with(Document::null)
    }
}

impl Index<usize> for Document {
    type Output = Document;

    #[inline]
    fn index(&self, index: usize) -> &Document {
        self.get_index(index).unwrap_or_else(|| null_document())
    }
}

impl IndexMut<usize> for Document {
    fn index_mut(&mut self, index: usize) -> &mut Document {
        let array = self.vivify_array();

        if array.len() <= index {
            array.resize_with(index + 1, Document::null);
        }

        &mut array[index]
    }
}
