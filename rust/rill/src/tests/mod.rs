
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct TestItem {
    pub num: i32,
    pub value: String,
}

pub(crate) fn item(num: i32, value: &str) -> TestItem {
    TestItem {
        num,
        value: value.to_string(),
    }
}

pub(crate) fn sample_items() -> Vec<TestItem> {
    vec![
        item(7, "item7"),
        item(6, "item6"),
        item(1, "item1"),
        item(2, "item2"),
        item(3, "item3"),
        item(4, "item4"),
        item(5, "item5"),
        item(7, "item5"),
        item(6, "item5"),
        item(8, "item8"),
    ]
}
