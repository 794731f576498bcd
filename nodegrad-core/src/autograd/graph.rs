use std::cell::RefCell;
use std::collections::HashSet;

use log::trace;

use crate::error::NodeGradError;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;

/// Stable identity of a graph node: the address of its shared `TensorData`.
///
/// Valid for as long as some `Tensor` handle keeps the node alive, which the
/// sorted node list guarantees for the duration of a backward pass.
pub type NodeId = *const RefCell<TensorData>;

/// Linearizes every node reachable from `root` through the predecessor
/// relation, in depth-first postorder: each node appears after all of its
/// predecessors, and exactly once even if the graph re-converges.
///
/// Iterative, so long chains do not exhaust the call stack. The graph must be
/// acyclic, which holds by construction since an operation can only consume
/// nodes that already exist.
pub(crate) fn topological_sort(root: &Tensor) -> Vec<Tensor> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted: Vec<Tensor> = Vec::new();
    // (node, predecessors already scheduled)
    let mut stack: Vec<(Tensor, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted.push(node);
            continue;
        }
        if !visited.insert(node.node_id()) {
            continue;
        }
        let predecessors = node.predecessors();
        stack.push((node, true));
        // Reversed so the first operand is explored first, like a recursive DFS.
        for input in predecessors.into_iter().rev() {
            if !visited.contains(&input.node_id()) {
                stack.push((input, false));
            }
        }
    }

    trace!("topological_sort: {} node(s) reachable from root", sorted.len());
    sorted
}

/// Runs the reverse sweep from `root`, whose gradient must already be seeded.
///
/// Intermediate nodes (every non-root node with a `grad_fn`) start the pass
/// from zero, so only leaves accumulate across repeated passes. Nodes are
/// visited in reverse topological order, so by the time a node's backward
/// rule runs every consumer has finished accumulating into its gradient.
/// Contributions are added, never assigned.
pub(crate) fn run_backward(root: &Tensor) -> Result<(), NodeGradError> {
    let sorted_nodes = topological_sort(root);
    for node in &sorted_nodes {
        if !node.ptr_eq(root) && !node.is_leaf() {
            node.zero_grad();
        }
    }

    for node in sorted_nodes.iter().rev() {
        let (grad_output, grad_fn) = {
            let guard = node.read_data();
            if !guard.requires_grad {
                continue;
            }
            match guard.grad_fn.as_ref() {
                Some(grad_fn) => (guard.grad.clone(), grad_fn.clone()),
                None => continue,
            }
        };

        trace!("backward: applying {} to node {:?}", grad_fn.name(), node.node_id());
        let input_grads = grad_fn.backward(&grad_output)?;
        let inputs = grad_fn.inputs();
        if input_grads.len() != inputs.len() {
            return Err(NodeGradError::InternalError(format!(
                "{} returned {} gradients for {} inputs",
                grad_fn.name(),
                input_grads.len(),
                inputs.len()
            )));
        }

        for (input, contribution) in inputs.into_iter().zip(input_grads) {
            if let Some(contribution) = contribution {
                if input.requires_grad() {
                    input.accumulate_grad(&contribution)?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::arithmetic::{add_op, mul_op};

    fn leaf(value: f32) -> Tensor {
        Tensor::new(vec![value], vec![1]).unwrap().with_requires_grad(true)
    }

    fn position(order: &[Tensor], t: &Tensor) -> usize {
        order.iter().position(|n| n.ptr_eq(t)).unwrap()
    }

    #[test]
    fn test_topological_sort_visits_each_node_once() {
        // Diamond: d = (a * b) + (a + b)
        let a = leaf(2.0);
        let b = leaf(3.0);
        let ab = mul_op(&a, &b).unwrap();
        let a_plus_b = add_op(&a, &b).unwrap();
        let d = add_op(&ab, &a_plus_b).unwrap();

        let order = topological_sort(&d);
        assert_eq!(order.len(), 5);

        let ids: HashSet<NodeId> = order.iter().map(Tensor::node_id).collect();
        assert_eq!(ids.len(), 5);

        // Predecessors come before their consumers; root is last.
        assert!(position(&order, &a) < position(&order, &ab));
        assert!(position(&order, &b) < position(&order, &ab));
        assert!(position(&order, &a) < position(&order, &a_plus_b));
        assert!(position(&order, &ab) < position(&order, &d));
        assert!(position(&order, &a_plus_b) < position(&order, &d));
        assert!(order.last().unwrap().ptr_eq(&d));
    }

    #[test]
    fn test_topological_sort_same_operand_twice() {
        let x = leaf(1.0);
        let y = add_op(&x, &x).unwrap();
        let order = topological_sort(&y);
        assert_eq!(order.len(), 2);
        assert!(order[0].ptr_eq(&x));
        assert!(order[1].ptr_eq(&y));
    }

    #[test]
    fn test_run_backward_resets_intermediate_grads() {
        let a = leaf(2.0);
        let b = leaf(3.0);
        let ab = mul_op(&a, &b).unwrap();
        let c = add_op(&ab, &b).unwrap();

        c.backward().unwrap();
        c.backward().unwrap();
        // Leaves accumulate two identical passes; the intermediate holds
        // only the latest one.
        assert_eq!(a.grad().as_slice(), Some(&[6.0][..]));
        assert_eq!(b.grad().as_slice(), Some(&[6.0][..]));
        assert_eq!(ab.grad().as_slice(), Some(&[1.0][..]));
    }

    #[test]
    fn test_topological_sort_chain() {
        let x = leaf(1.0);
        let mut y = x.clone();
        for _ in 0..1_000 {
            y = add_op(&y, &x).unwrap();
        }
        let order = topological_sort(&y);
        assert_eq!(order.len(), 1_001);
        assert!(order[0].ptr_eq(&x));
    }
}
