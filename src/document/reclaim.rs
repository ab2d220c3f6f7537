/*!
Tearing down documents without recursion.

Dropping a tree of nested containers the naive way recurses once per level,
so a document nested deeply enough overflows the stack just by going out of scope.

Instead, when a document is the last owner of an object or array, its children are
moved out into a queue before the node itself is freed. Each child is then dropped
from the queue in turn, moving its own children onto the end of the queue first.
A node is only ever freed once it's empty, so no drop goes more than one level deep.
*/

use std::{collections::VecDeque, mem, sync::Arc};

use super::{Document, Value};

impl Drop for Document {
    fn drop(&mut self) {
        if !owns_children(&mut self.node) {
            return;
        }

        let mut pending = VecDeque::new();
        detach_children(&mut self.node, &mut pending);

        while let Some(mut doc) = pending.pop_front() {
            detach_children(&mut doc.node, &mut pending);

            // `doc` is dropped here with no children left to free
        }
    }
}

/**
Whether dropping this node will free a non-empty container.

Shared nodes and scalars are freed by their last owner without any work from us.
*/
#[inline]
fn owns_children(node: &mut Arc<Value>) -> bool {
    match Arc::get_mut(node) {
        Some(Value::Object(o)) => !o.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        _ => false,
    }
}

#[inline]
fn detach_children(node: &mut Arc<Value>, pending: &mut VecDeque<Document>) {
    match Arc::get_mut(node) {
        Some(Value::Object(o)) => pending.extend(mem::take(o).into_values()),
        Some(Value::Array(a)) => pending.extend(a.drain(..)),
        _ => (),
    }
}
