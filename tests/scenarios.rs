use expect_test::expect;
use tailed_list::{List, ListError};

fn elements<T: Clone>(list: &List<T>) -> Vec<T> {
    list.iter().cloned().collect()
}

#[test]
fn build_edit_and_render() -> Result<(), ListError> {
    let mut list = List::new();
    list.append(1);
    list.append(2);
    list.prepend(0);
    assert_eq!(elements(&list), [0, 1, 2]);
    assert_eq!(list.len(), 3);
    expect!["List(0,1,2)"].assert_eq(&list.to_string());

    assert_eq!(list.remove(1)?, 1);
    assert_eq!(elements(&list), [0, 2]);
    assert_eq!(list.len(), 2);

    list.insert(1, 9)?;
    assert_eq!(elements(&list), [0, 9, 2]);

    assert_eq!(
        list.get(5),
        Err(ListError::InvalidIndex { index: 5, len: 3 })
    );
    assert_eq!(elements(&list), [0, 9, 2]);
    expect!["List(0,9,2)"].assert_eq(&list.to_string());
    Ok(())
}

#[test]
fn failed_operations_leave_list_unchanged() {
    let mut list = List::from([0, 9, 2]);
    assert!(list.set(3, 1).is_err());
    assert!(list.insert(4, 1).is_err());
    assert!(list.remove(3).is_err());
    assert!(list.get(usize::MAX).is_err());
    assert_eq!(elements(&list), [0, 9, 2]);
    assert_eq!(list.front(), Some(&0));
    assert_eq!(list.back(), Some(&2));
}

#[test]
fn set_changes_only_one_position() -> Result<(), ListError> {
    let original = List::from_iter(0..6);
    for at in 0..original.len() {
        let mut list = original.clone();
        list.set(at, 100)?;
        for i in 0..list.len() {
            let expected = if i == at { 100 } else { i };
            assert_eq!(list.get(i)?, &expected);
        }
    }
    Ok(())
}

#[test]
fn random_walk_keeps_len_and_iteration_in_sync() -> Result<(), ListError> {
    let mut list = List::new();
    let mut model = Vec::new();
    // A deterministic linear congruential sequence drives the operations.
    let mut seed: u64 = 0x2545_f491;
    for step in 0..2_000 {
        seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        let pick = (seed >> 33) as usize;
        let at = if model.is_empty() { 0 } else { pick % (model.len() + 1) };
        match pick % 5 {
            0 => {
                list.append(step);
                model.push(step);
            }
            1 => {
                list.prepend(step);
                model.insert(0, step);
            }
            2 => {
                list.insert(at, step)?;
                model.insert(at, step);
            }
            3 if at < model.len() => {
                assert_eq!(list.remove(at)?, model.remove(at));
            }
            _ if at < model.len() => {
                assert_eq!(list.set(at, step)?, std::mem::replace(&mut model[at], step));
            }
            _ => assert!(list.remove(at).is_err()),
        }
        assert_eq!(list.is_empty(), list.len() == 0);
        assert_eq!(list.len(), model.len());
        assert_eq!(list.iter().count(), list.len());
        assert_eq!(list.front(), model.first());
        assert_eq!(list.back(), model.last());
    }
    assert_eq!(elements(&list), model);
    Ok(())
}

#[test]
fn copies_do_not_share_nodes() -> Result<(), ListError> {
    let mut a = List::from_iter(0..4);
    let mut b = a.clone();
    b.remove(0)?;
    b.set(0, 50)?;
    a.insert(4, 4)?;
    assert_eq!(elements(&a), [0, 1, 2, 3, 4]);
    assert_eq!(elements(&b), [50, 2, 3]);
    expect!["List(50,2,3)"].assert_eq(&b.to_string());
    Ok(())
}

#[test]
fn iterator_exhaustion() {
    let list = List::from_iter(0..3);
    let mut iter = list.iter();
    let mut seen = 0;
    while iter.has_next() {
        assert_eq!(iter.try_next(), Ok(&seen));
        seen += 1;
    }
    assert_eq!(seen, list.len());
    assert_eq!(iter.try_next(), Err(ListError::ExhaustedSequence));
    assert_eq!(iter.next(), None);
}
