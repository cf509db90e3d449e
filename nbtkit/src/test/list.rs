use std::convert::TryFrom;

use crate::{error::ErrorKind, Compound, IntArray, List, Tag, Value};

#[test]
fn new_list_has_no_type() {
    let list = List::new();
    assert_eq!(list.el_type(), Tag::Null);
    assert!(list.is_empty());
}

#[test]
fn first_push_fixes_type() {
    let mut list = List::new();
    list.push(1_i16).unwrap();
    assert_eq!(list.el_type(), Tag::Short);

    list.push(2_i16).unwrap();
    assert_eq!(list.len(), 2);
}

#[test]
fn push_of_other_type_fails_and_leaves_list_unchanged() {
    let mut list = List::of::<i32>([1]);

    let err = list.push(2_i64).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Cast);
    assert_eq!(list.len(), 1);
    assert_eq!(list.el_type(), Tag::Int);

    assert!(list.push("2").is_err());
    assert_eq!(list, List::of::<i32>([1]));
}

#[test]
fn push_null_fails() {
    let mut list = List::new();
    assert!(list.push(Value::Null).unwrap_err().is_cast());
    assert_eq!(list.el_type(), Tag::Null);
    assert!(list.is_empty());
}

#[test]
fn with_type_pins_before_first_push() {
    let mut list = List::with_type(Tag::String);
    assert!(list.push(1).is_err());
    list.push("ok").unwrap();

    assert_eq!(List::with_type(Tag::End).el_type(), Tag::Null);
}

#[test]
fn emplace_constructs_element() {
    let mut list = List::new();
    list.emplace::<IntArray, _>(vec![1, 2, 3]).unwrap();
    list.emplace::<IntArray, _>([4]).unwrap();
    assert_eq!(list.el_type(), Tag::IntArray);
    assert!(list.emplace::<String, _>("no").is_err());
    assert_eq!(list.len(), 2);
}

#[test]
fn set_is_bounds_and_type_checked() {
    let mut list = List::of::<i8>([1, 2]);
    list.set(1, 5_i8).unwrap();
    assert_eq!(list[1], Value::Byte(5));

    assert_eq!(list.set(2, 5_i8).unwrap_err().kind(), ErrorKind::OutOfRange);
    assert_eq!(list.set(0, 5_i16).unwrap_err().kind(), ErrorKind::Cast);
    assert_eq!(list.set(0, Value::Null).unwrap_err().kind(), ErrorKind::Cast);
    assert_eq!(list, List::of::<i8>([1, 5]));
}

#[test]
fn at_is_bounds_checked() {
    let mut list = List::of::<f32>([1.0]);
    assert_eq!(list.at(0).unwrap(), &Value::Float(1.0));
    assert_eq!(list.at(1).unwrap_err().kind(), ErrorKind::OutOfRange);
    assert_eq!(list.at_mut(1).unwrap_err().kind(), ErrorKind::OutOfRange);
    assert!(list.get(1).is_none());

    list.at_mut(0).unwrap().set(2_i8).unwrap();
    assert_eq!(list[0], Value::Float(2.0));
}

#[test]
#[should_panic]
fn index_out_of_range_panics() {
    let list = List::of::<i8>([]);
    let _ = &list[0];
}

#[test]
fn pop_on_empty_is_none() {
    let mut list = List::of::<i8>([1]);
    assert_eq!(list.pop(), Some(Value::Byte(1)));
    assert_eq!(list.pop(), None);
    assert_eq!(list.el_type(), Tag::Byte);
}

#[test]
fn clear_keeps_type_reset_forgets_it() {
    let mut list = List::of::<i64>([1, 2]);
    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.el_type(), Tag::Long);
    assert!(list.push(1_i32).is_err());

    list.reset();
    assert_eq!(list.el_type(), Tag::Null);
    list.push(1_i32).unwrap();

    list.reset_to(Tag::Compound);
    assert!(list.is_empty());
    list.push(Compound::new()).unwrap();
}

#[test]
fn of_fixes_type_for_empty_input() {
    let list = List::of::<String>(Vec::new());
    assert_eq!(list.el_type(), Tag::String);

    let list = List::of::<List>([List::new(), List::of::<i8>([1])]);
    assert_eq!(list.el_type(), Tag::List);
    assert_eq!(list.len(), 2);
}

#[test]
fn from_values_checks_uniformity() {
    let list = List::from_values(vec![Value::Int(1), Value::Int(2)]).unwrap();
    assert_eq!(list.el_type(), Tag::Int);
    assert_eq!(list, List::of::<i32>([1, 2]));

    let err = List::from_values(vec![Value::Int(1), Value::Short(2)]).unwrap_err();
    assert!(err.is_cast());

    let err = List::try_from(vec![Value::Null]).unwrap_err();
    assert!(err.is_cast());

    assert_eq!(List::from_values(vec![]).unwrap().el_type(), Tag::Null);
}

#[test]
fn empty_lists_are_equal_regardless_of_type() {
    assert_eq!(List::with_type(Tag::Int), List::with_type(Tag::Short));
    assert_eq!(List::of::<i32>([]), List::new());
}

#[test]
fn non_empty_lists_compare_type_and_contents() {
    assert_ne!(List::of::<i32>([1]), List::of::<i64>([1]));
    assert_ne!(List::of::<i32>([1]), List::of::<i32>([2]));
    assert_ne!(List::of::<i32>([1]), List::of::<i32>([]));
    assert_eq!(List::of::<i32>([1, 2]), List::of::<i32>([1, 2]));
}

#[test]
fn iteration() {
    let mut list = List::of::<i32>([1, 2, 3]);
    for v in list.iter_mut() {
        v.set(v.as_i32().unwrap() * 2).unwrap();
    }

    let doubled: Vec<i32> = list.iter().map(|v| v.as_i32().unwrap()).collect();
    assert_eq!(doubled, [2, 4, 6]);

    let owned: Vec<Value> = list.into_iter().collect();
    assert_eq!(owned.len(), 3);
}

#[test]
fn raw_store_through_at_mut_keeps_el_type() {
    let mut list = List::of::<i16>([1, 2]);
    *list.at_mut(0).unwrap() = Value::Long(1);

    // The declared type stays, the element does not match it.
    assert_eq!(list.el_type(), Tag::Short);
    assert_eq!(list[0].tag(), Tag::Long);
    assert_ne!(list, List::of::<i16>([1, 2]));

    // assign keeps the slot pinned instead.
    let mut list = List::of::<i16>([1, 2]);
    assert!(list.at_mut(0).unwrap().assign(1_i64).is_err());
    assert_eq!(list, List::of::<i16>([1, 2]));
}
