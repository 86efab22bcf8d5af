use std::collections::{BTreeMap, HashSet, VecDeque};
use std::fmt::{Display, Formatter, Result as FmtResult};

use prop_match::{
    matcher::properties_like, Error, Matcher, Properties, ToValue, Value, TYPE_PROPERTY,
};

#[derive(Default, Properties)]
#[properties(rename_all = "camelCase")]
struct TestClass {
    value: Option<String>,
    int_value: i32,
}

#[derive(Properties)]
#[properties(computed(name = "fullName", getter = full_name))]
#[properties(computed(name = "checked", try_getter = Person::checked))]
struct Person {
    first: String,
    last: String,

    #[property(rename = "years")]
    age: u32,

    #[property(skip)]
    #[allow(dead_code)]
    secret: String,

    #[property(getter = initial)]
    #[allow(dead_code)]
    initial: char,
}

impl Person {
    fn full_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }

    fn initial(&self) -> char {
        self.first.chars().next().unwrap_or('?')
    }

    fn checked(&self) -> Result<u32, AgeError> {
        if self.age < 150 {
            Ok(self.age)
        } else {
            Err(AgeError(self.age))
        }
    }
}

#[derive(Debug)]
struct AgeError(u32);

impl Display for AgeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "invalid age {}", self.0)
    }
}

impl std::error::Error for AgeError {}

#[derive(Properties)]
struct Wrapper<T> {
    inner: T,
    count: u8,
}

#[derive(Properties)]
struct Marker;

#[derive(Clone, Properties)]
struct Tagged {
    tags: HashSet<String>,
    point: (i32, i32),
    rgb: [u8; 3],
    limits: BTreeMap<String, u32>,
    queue: VecDeque<char>,
}

impl Tagged {
    fn new() -> Self {
        Self {
            tags: HashSet::from(["red".to_owned(), "round".to_owned()]),
            point: (1, 2),
            rgb: [255, 0, 0],
            limits: BTreeMap::from([("max".to_owned(), 10)]),
            queue: VecDeque::from(['a', 'b']),
        }
    }
}

#[derive(Properties)]
#[properties(computed(name = "label", getter = label))]
struct Labeled<T: ToValue + Clone> {
    #[property(skip)]
    label: T,
}

impl<T: ToValue + Clone> Labeled<T> {
    fn label(&self) -> T {
        self.label.clone()
    }
}

fn person(age: u32) -> Person {
    Person {
        first: "Ada".into(),
        last: "Lovelace".into(),
        age,
        secret: "hidden".into(),
        initial: 'x',
    }
}

#[test]
fn names_in_declaration_order() {
    let object = TestClass::default();

    assert_eq!(
        vec![TYPE_PROPERTY, "value", "intValue"],
        object.property_names()
    );
}

#[test]
fn type_property_is_type_name() {
    let value = TestClass::default().property(TYPE_PROPERTY).unwrap();

    assert_eq!(
        Some(std::any::type_name::<TestClass>()),
        value.downcast_ref::<String>().map(String::as_str)
    );
}

#[test]
fn fields_are_read() {
    let object = TestClass {
        value: Some("testValue".into()),
        int_value: 5,
    };

    assert!(object
        .property("value")
        .unwrap()
        .same_as(&"testValue".to_value()));
    assert!(object.property("intValue").unwrap().same_as(&5.to_value()));
    assert!(TestClass::default().property("value").unwrap().is_null());
}

#[test]
fn unknown_property() {
    let err = TestClass::default().property("int_value").unwrap_err();

    assert!(matches!(err, Error::UnknownProperty { name, .. } if name == "int_value"));
}

#[test]
fn attributes() {
    let object = person(36);

    assert_eq!(
        vec![TYPE_PROPERTY, "first", "last", "years", "initial", "fullName", "checked"],
        object.property_names()
    );
    assert!(object.property("years").unwrap().same_as(&36u32.to_value()));
    assert!(object.property("initial").unwrap().same_as(&'A'.to_value()));
    assert!(object
        .property("fullName")
        .unwrap()
        .same_as(&"Ada Lovelace".to_value()));
    assert!(object.property("checked").unwrap().same_as(&36u32.to_value()));
    assert!(matches!(
        object.property("secret"),
        Err(Error::UnknownProperty { .. })
    ));
}

#[test]
fn failing_getter() {
    let err = person(200).property("checked").unwrap_err();

    assert!(matches!(&err, Error::Accessor { name, .. } if name == "checked"));
    assert_eq!(
        "The accessor of property `checked` failed: invalid age 200",
        err.to_string()
    );
}

#[test]
fn generic_struct() {
    let object = Wrapper {
        inner: vec![1, 2],
        count: 2,
    };

    assert_eq!(vec![TYPE_PROPERTY, "inner", "count"], object.property_names());
    assert!(object
        .property("inner")
        .unwrap()
        .same_as(&Value::new(vec![1, 2])));
}

#[test]
fn unit_struct() {
    assert_eq!(vec![TYPE_PROPERTY], Marker.property_names());
}

#[test]
fn collection_and_tuple_fields() {
    let reference = Tagged::new();
    let matcher = properties_like(&reference).unwrap();

    assert_eq!(5, matcher.len());
    assert!(matcher.matches(&Tagged::new()));

    let mut moved = Tagged::new();
    moved.point = (2, 1);
    assert!(!matcher.matches(&moved));

    let mut retagged = Tagged::new();
    retagged.tags.insert("shiny".into());
    assert!(!matcher.matches(&retagged));

    assert!(reference
        .property("rgb")
        .unwrap()
        .same_as(&[255u8, 0, 0].to_value()));
}

#[test]
fn generic_getter_with_explicit_bound() {
    let object = Labeled { label: 7u16 };

    assert_eq!(vec![TYPE_PROPERTY, "label"], object.property_names());
    assert!(object.property("label").unwrap().same_as(&7u16.to_value()));
}
