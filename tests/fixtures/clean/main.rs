use std::collections::HashMap;

fn lookup(map: &HashMap<String, i32>, key: &str) -> Option<i32> {
    map.get(key).copied()
}

fn main() {
    let mut map = HashMap::new();
    map.insert("one".to_string(), 1);
    if let Some(value) = lookup(&map, "one") {
        println!("{value}");
    }
}
