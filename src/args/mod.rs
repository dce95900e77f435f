//! Command-line surface.
//!
//! ```text
//! bullion-admin [console]          interactive console
//! bullion-admin login --email ...  store a session
//! bullion-admin <group> <action>   one API call, JSON on stdout
//! ```
//!
//! API commands run the same validation as the console forms, so nothing
//! reaches the backend that the console would have refused.

mod cli;
mod execute;

pub use cli::{
    AnalyticsCommand, ApiCommand, Cli, Command, DateRange, LoginArgs, OrderFilters,
    OrdersCommand, PageArgs, PricesCommand, ProductArgs, ProductsCommand, ReferralsCommand,
    RefundsCommand, SchemesCommand, UsersCommand,
};
pub use execute::execute;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MetalType;
    use crate::worker::OrderStream;
    use clap::Parser;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("bullion-admin").chain(args.iter().copied()))
    }

    #[test]
    fn no_subcommand_opens_console() {
        let cli = parse(&[]).unwrap();
        assert!(matches!(cli.into_command(), Command::Console));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["users", "list", "--api-url", "http://localhost:9000", "-vv"]).unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn page_defaults() {
        let cli = parse(&["refunds", "list"]).unwrap();
        match cli.into_command() {
            Command::Api(ApiCommand::Refunds(RefundsCommand::List { page })) => {
                assert_eq!(page.skip, 0);
                assert_eq!(page.limit, 100);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn limit_is_capped_at_one_hundred() {
        assert!(parse(&["users", "list", "--limit", "101"]).is_err());
        assert!(parse(&["users", "list", "--limit", "0"]).is_err());
    }

    #[test]
    fn refund_initiate_keeps_raw_amount() {
        let cli = parse(&[
            "refunds", "initiate", "ORD123", "--amount", "500", "--reason", "damaged",
        ])
        .unwrap();
        match cli.into_command() {
            Command::Api(ApiCommand::Refunds(RefundsCommand::Initiate {
                order_id,
                amount,
                reason,
            })) => {
                assert_eq!(order_id, "ORD123");
                assert_eq!(amount, "500");
                assert_eq!(reason, "damaged");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn metal_and_stream_parse_case_insensitively() {
        let cli = parse(&["prices", "set", "--metal", "Silver", "--buy", "1", "--sell", "2"])
            .unwrap();
        assert!(matches!(
            cli.into_command(),
            Command::Api(ApiCommand::Prices(PricesCommand::Set {
                metal: MetalType::Silver,
                ..
            }))
        ));

        let cli = parse(&["orders", "list", "ornaments", "--user", "u1"]).unwrap();
        match cli.into_command() {
            Command::Api(ApiCommand::Orders(OrdersCommand::List {
                stream, filters, ..
            })) => {
                assert_eq!(stream, OrderStream::Ornaments);
                assert_eq!(filters.user.as_deref(), Some("u1"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn unknown_metal_is_rejected() {
        assert!(parse(&["prices", "latest", "--metal", "platinum"]).is_err());
    }

    #[test]
    fn product_photos_repeat() {
        let cli = parse(&[
            "products", "create", "--name", "Coin", "--category", "coins", "--photo", "a.png",
            "--photo", "b.jpg",
        ])
        .unwrap();
        match cli.into_command() {
            Command::Api(ApiCommand::Products(ProductsCommand::Create(args))) => {
                assert_eq!(args.photos.len(), 2);
                assert!(args.certificate.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
