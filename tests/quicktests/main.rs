use quickcheck::{Arbitrary, Gen};

mod ordered;

/// An enum for the various kinds of "things" to do to
/// an ordered tree in a quicktest.
#[derive(Clone, Debug)]
pub enum Op<E> {
    /// Insert the value into the tree
    Insert(E),
    /// Look the value up
    Find(E),
}

impl<E> Arbitrary for Op<E>
where
    E: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1]).unwrap() {
            0 => Op::Insert(E::arbitrary(g)),
            1 => Op::Find(E::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
