use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: VersionArgs) -> CliResult<i32> {
    if !args.extended {
        println!("objcheck {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    println!("name: objcheck");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!("build_target: {}", env!("OBJCHECK_BUILD_TARGET"));
    println!("build_profile: {}", env!("OBJCHECK_BUILD_PROFILE"));
    println!(
        "rules: required, {}",
        objcheck::engine::Rule::ALL
            .iter()
            .map(|rule| rule.name())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!(
        "locales: default, {}",
        objcheck::locale::LocaleCatalog::shared().locales().join(", ")
    );

    Ok(SUCCESS)
}
