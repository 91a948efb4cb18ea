use assert_matches::assert_matches;
use node_collections::linked_list::LinkedList;
use node_collections::Error;

quickcheck::quickcheck! {
    fn construct_round_trip(xs: Vec<i8>) -> bool {
        let list: LinkedList<_> = xs.clone().into();

        list.to_vec() == xs && list.len() == xs.len()
    }
}

quickcheck::quickcheck! {
    fn get_out_of_range(xs: Vec<i8>, extra: u8) -> bool {
        let list: LinkedList<_> = xs.clone().into();
        let index = xs.len() + extra as usize;

        list.get(index) == Err(Error::OutOfRange { index, len: xs.len() })
    }
}

quickcheck::quickcheck! {
    fn append_is_insert_at_len(xs: Vec<i8>, x: i8) -> bool {
        let mut appended: LinkedList<_> = xs.clone().into();
        let mut inserted: LinkedList<_> = xs.into();

        appended.append(x);
        let len = inserted.len();
        inserted.insert(len, x) == Ok(()) && appended == inserted
    }
}

quickcheck::quickcheck! {
    fn drain_from_both_ends(xs: Vec<i8>) -> bool {
        let mut list: LinkedList<_> = xs.clone().into();
        let mut front = 0;
        let mut back = xs.len();

        while front < back {
            if list.remove_first() != Ok(xs[front]) {
                return false;
            }
            front += 1;
            if front < back {
                back -= 1;
                if list.remove_last() != Ok(xs[back]) {
                    return false;
                }
            }
            if list.is_empty() != (list.len() == 0) {
                return false;
            }
        }

        list.is_empty()
    }
}

quickcheck::quickcheck! {
    fn sum_and_max_match_vec(xs: Vec<i32>) -> bool {
        let list: LinkedList<_> = xs.iter().map(|&x| x as i64).collect();

        list.sum() == xs.iter().map(|&x| x as i64).sum::<i64>()
            && list.max().ok().copied() == xs.iter().map(|&x| x as i64).max()
    }
}

#[test]
fn pop_scenario() {
    let mut list: LinkedList<_> = vec![10, 20, 30].into();

    assert_eq!(list.pop(1), Ok(20));
    assert_eq!(list.to_vec(), vec![10, 30]);
    assert_matches!(list.pop(5), Err(Error::OutOfRange { index: 5, .. }));
}

#[test]
fn remove_scenario() {
    let mut list: LinkedList<_> = vec![10, 20, 30, 20].into();

    assert_eq!(list.remove(&20), Ok(20));
    assert_eq!(list.to_vec(), vec![10, 30, 20]);
}

#[test]
fn errors_display() {
    assert_eq!(
        Error::OutOfRange { index: 5, len: 2 }.to_string(),
        "index 5 is out of range for a list of length 2"
    );
    assert_eq!(Error::NotFound.to_string(), "value not found");
    assert_eq!(
        Error::EmptyCollection.to_string(),
        "the operation doesn't work on an empty collection"
    );
}
