use hoptrace_core::*;
use hoptrace_types::Platform;

#[test]
fn test_validated_command_translates_for_other_platform() {
    let policy = CommandPolicy::new(Platform::Unix);
    let validated = policy.validate(Some("traceroute -n -m 5 -w 2 host")).unwrap();
    assert_eq!(validated.command_type, CommandType::Traceroute);

    let argv = translate(&validated.command, Platform::Windows);
    assert_eq!(argv, ["tracert", "-d", "-h", "5", "-w", "2000", "host"]);
}

#[test]
fn test_lookup_command_keeps_tokens() {
    let policy = CommandPolicy::new(Platform::Unix);
    let validated = policy.validate(Some("nslookup example.com")).unwrap();
    assert_eq!(validated.command_type, CommandType::Dns);
    assert_eq!(
        translate(&validated.command, Platform::Unix),
        ["nslookup", "example.com"]
    );
}

#[test]
fn test_wait_time_units() {
    let wait = WaitTime::parse("2.5", Platform::Unix).unwrap();
    assert_eq!(wait.millis(), 2500);
    assert_eq!(wait.render(Platform::Windows), "2500");
    assert_eq!(wait.render(Platform::Unix), "3");

    assert!(WaitTime::parse("-1", Platform::Unix).is_none());
    assert!(WaitTime::parse("1.5", Platform::Windows).is_none());
    assert_eq!(trace_binary(Platform::Windows), "tracert");
}
