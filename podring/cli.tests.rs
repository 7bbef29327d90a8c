use clap::error::ErrorKind;

use super::*;

#[test]
fn parse_cluster_args_test() {
    let args = Args::try_parse_from(["podring", "deploy", "web", "-n", "shop", "--no-autoscaler"]).unwrap();

    assert_eq!(Some(WorkloadKind::Deployment), args.kind);
    assert_eq!(Some("web"), args.name.as_deref());
    assert_eq!(Some("shop"), args.namespace.as_deref());
    assert!(args.no_autoscaler);
}

#[test]
fn parse_file_args_test() {
    let args = Args::try_parse_from(["podring", "--file", "snapshot.yaml", "-o", "yaml"]).unwrap();

    assert_eq!(Some(PathBuf::from("snapshot.yaml")), args.file);
    assert_eq!(OutputFormat::Yaml, args.output(OutputFormat::Text));
}

#[test]
fn file_conflicts_with_no_autoscaler_test() {
    let error = Args::try_parse_from(["podring", "--file", "snapshot.yaml", "--no-autoscaler"]).unwrap_err();

    assert_eq!(ErrorKind::ArgumentConflict, error.kind());
}

#[test]
fn kind_required_without_file_test() {
    let error = Args::try_parse_from(["podring"]).unwrap_err();

    assert_eq!(ErrorKind::MissingRequiredArgument, error.kind());
}
