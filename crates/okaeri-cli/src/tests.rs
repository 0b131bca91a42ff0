use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["okaeri"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
    assert_eq!(cli.surface, okaeri_core::PageSurface::Main);
}

#[test]
fn list_defaults_to_all_tab_without_search() {
    let cli = Cli::try_parse_from(["okaeri", "list"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::List { ref filter, search: None }) if filter == "all"
    ));
}

#[test]
fn list_with_filter_and_search() {
    let cli = Cli::try_parse_from([
        "okaeri", "list", "--filter", "camp", "--search", "沖縄",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::List { ref filter, search: Some(ref s) }) if filter == "camp" && s == "沖縄"
    ));
}

#[test]
fn surface_and_catalog_are_global() {
    let cli = Cli::try_parse_from([
        "okaeri",
        "select",
        "42",
        "--surface",
        "modify",
        "--catalog",
        "/tmp/c.yaml",
    ])
    .unwrap();
    assert_eq!(cli.surface, okaeri_core::PageSurface::Modify);
    assert_eq!(cli.catalog, PathBuf::from("/tmp/c.yaml"));
    assert!(matches!(cli.command, Some(Commands::Select { ref value }) if value == "42"));
}

#[test]
fn unknown_surface_is_rejected() {
    assert!(Cli::try_parse_from(["okaeri", "--surface", "popup", "list"]).is_err());
}

#[test]
fn favorite_requires_value() {
    assert!(Cli::try_parse_from(["okaeri", "favorite"]).is_err());
}

#[test]
fn flags_set_parses_bool() {
    let cli = Cli::try_parse_from(["okaeri", "flags", "set", "locationSelectorSearch", "false"])
        .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Flags {
            command: FlagsCommands::Set { ref flag, enabled: false }
        }) if flag == "locationSelectorSearch"
    ));
}
