use serde_json::{Value, json};

use super::*;

#[test]
fn json_lists_functions_ops_and_types() {
    let mut m = Module::new();
    let int = m.intern_type("int").unwrap();
    let f = m.add_function("main", &[int]).unwrap();
    let mut b = m.builder(f).unwrap();
    let x = b.arg(0, "x").unwrap();
    let g = b.global("print").unwrap();
    b.call(g, &[], &[("end", x)]).unwrap();

    let json: Value = serde_json::from_str(&m.to_json().unwrap()).unwrap();

    assert_eq!(
        json,
        json!({
            "functions": [{
                "name": "main",
                "args": [{ "id": 0, "type": "PyType<int>" }],
                "ops": [
                    {
                        "id": 0,
                        "kind": "arg",
                        "index": 0,
                        "name": "x",
                        "operands": [],
                        "result": { "id": 1, "type": "PyType<>" }
                    },
                    {
                        "id": 1,
                        "kind": "global",
                        "name": "print",
                        "operands": [],
                        "result": { "id": 2, "type": "PyType<>" }
                    },
                    {
                        "id": 2,
                        "kind": "call",
                        "kw_names": ["end"],
                        "operands": [2, 1],
                        "result": { "id": 3, "type": "PyType<>" }
                    }
                ]
            }]
        })
    );
}

#[test]
fn json_marks_dead_ops() {
    let mut m = Module::new();
    let f = m.add_function("f", &[]).unwrap();
    let mut b = m.builder(f).unwrap();
    let c = b.constant(2.5).unwrap();
    let op = m.defining_op(c).unwrap();
    m.kill_op(op);

    let json: Value = serde_json::from_str(&m.to_json().unwrap()).unwrap();

    let dumped = &json["functions"][0]["ops"][0];
    assert_eq!(dumped["dead"], json!(true));
    assert_eq!(dumped["value"], json!({ "float": 2.5 }));
}
