/// An ordered list of callables invoked in registration order, each with the
/// same arguments. The Rust rendering of a multicast delegate.
pub struct Multicast<A> {
    ops: Vec<Box<dyn Fn(&A)>>,
}

impl<A> Multicast<A> {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    pub fn add<F>(&mut self, op: F)
    where
        F: Fn(&A) + 'static,
    {
        self.ops.push(Box::new(op));
    }

    pub fn invoke(&self, args: &A) {
        for op in &self.ops {
            op(args);
        }
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl<A> Default for Multicast<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_invokes_in_registration_order_with_same_args() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut op: Multicast<(f64, f64)> = Multicast::new();

        let log = Rc::clone(&calls);
        op.add(move |&(a, b)| log.borrow_mut().push(format!("sum:{}", a + b)));
        let log = Rc::clone(&calls);
        op.add(move |&(a, b)| log.borrow_mut().push(format!("max:{}", a.max(b))));

        op.invoke(&(10.0, 12.0));
        assert_eq!(*calls.borrow(), ["sum:22", "max:12"]);
    }

    #[test]
    fn test_empty_multicast_is_a_noop() {
        let op: Multicast<u32> = Multicast::default();
        assert!(op.is_empty());
        op.invoke(&7);
    }

    #[test]
    fn test_len_tracks_registration() {
        let mut op: Multicast<()> = Multicast::new();
        op.add(|_| {});
        op.add(|_| {});
        assert_eq!(op.len(), 2);
    }
}
