use hoptrace_engine::{PathTree, snapshot_of};
use hoptrace_parser::parse_trace;

const RUN: &str = "\
traceroute to example.com (93.184.216.34), 30 hops max
 1  router (192.168.1.1)  1.123 ms  1.234 ms  1.345 ms
 2  * * *
 3  example.com (93.184.216.34)  10.234 ms  10.345 ms  10.456 ms
";

#[test]
fn test_example_com_snapshot() {
    let hops = parse_trace(RUN);
    let mut tree = PathTree::new();
    tree.accumulate("example.com", &hops);

    let snapshot = tree.snapshot();
    let views = &snapshot["example.com"];
    assert_eq!(views.len(), 2);

    assert_eq!(views[0].hop_number, 1);
    assert_eq!(views[0].nodes, ["router"]);
    assert_eq!(views[0].ips, ["192.168.1.1"]);

    assert!(views.iter().all(|v| v.hop_number != 2));

    assert_eq!(views[1].hop_number, 3);
    assert_eq!(views[1].nodes, ["example.com"]);
    assert_eq!(views[1].ips, ["93.184.216.34"]);
}

#[test]
fn test_repeated_runs_do_not_change_snapshot() {
    let hops = parse_trace(RUN);
    let mut tree = PathTree::new();
    tree.accumulate("example.com", &hops);
    let first = tree.snapshot();
    tree.accumulate("example.com", &hops);
    assert_eq!(tree.snapshot(), first);
    assert_eq!(snapshot_of("example.com", &hops), first);
}

#[test]
fn test_snapshot_json_shape() {
    let snapshot = snapshot_of("example.com", &parse_trace(RUN));
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["example.com"][0]["hop_number"], 1);
    assert_eq!(json["example.com"][0]["nodes"][0], "router");
}
