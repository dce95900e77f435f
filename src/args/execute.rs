//! Runs one API command and returns what to print.

use anyhow::{bail, Context};
use serde::Serialize;
use serde_json::{json, Value};

use crate::api::{ApiClient, OrderParams, ProductUploads};
use crate::args::cli::{
    AnalyticsCommand, ApiCommand, OrderFilters, OrdersCommand, PageArgs, PricesCommand,
    ProductArgs, ProductsCommand, ReferralsCommand, RefundsCommand, SchemesCommand,
    UsersCommand,
};
use crate::models::{
    CategoryDraft, DashboardParams, FulfillmentStatus, MetalType, PageParams, ProductDraft,
};
use crate::validation::files::{check, select_photos, UploadKind};
use crate::validation::{validate_product, PriceForm, ReferralForm, RefundForm, SchemeForm};
use crate::worker::OrderStream;

fn to_json<T: Serialize>(value: T) -> anyhow::Result<Value> {
    serde_json::to_value(value).context("failed to encode response")
}

impl From<PageArgs> for PageParams {
    fn from(page: PageArgs) -> Self {
        PageParams::new(page.skip, page.limit)
    }
}

impl OrderFilters {
    fn params(self, page: PageArgs) -> OrderParams {
        OrderParams {
            user_id: self.user,
            status_filter: self.status,
            fulfillment_status: self.fulfillment,
            ..OrderParams::page(page.skip, page.limit)
        }
    }
}

impl ProductArgs {
    /// Validated draft and uploads; nothing is sent when a check fails.
    fn prepare(self) -> anyhow::Result<(ProductDraft, ProductUploads)> {
        let draft = ProductDraft {
            name: self.name,
            category: self.category,
            sku: self.sku,
            metal_type: self.metal,
            purity: self.purity,
            weight: self.weight,
            gross_weight: self.gross_weight,
            net_weight: self.net_weight,
            stone_weight: self.stone_weight,
            stock: self.stock,
            wastage_percentage: self.wastage,
            making_charge: self.making_charge,
            gst: self.gst,
            discount_percentage: self.discount,
            discount_type: self.discount_type,
        };
        validate_product(&draft)?;

        let (photos, rejected) = select_photos(self.photos.as_slice());
        for error in &rejected {
            tracing::warn!("skipping photo: {error}");
        }
        let certificate = self
            .certificate
            .map(|path| check(UploadKind::Certificate, &path))
            .transpose()?;
        Ok((draft, ProductUploads { photos, certificate }))
    }
}

pub async fn execute(api: &ApiClient, command: ApiCommand) -> anyhow::Result<Value> {
    match command {
        ApiCommand::Users(command) => users(api, command).await,
        ApiCommand::Products(command) => products(api, command).await,
        ApiCommand::Prices(command) => prices(api, command).await,
        ApiCommand::Refunds(command) => refunds(api, command).await,
        ApiCommand::Orders(command) => orders(api, command).await,
        ApiCommand::Referrals(command) => referrals(api, command).await,
        ApiCommand::Schemes(command) => schemes(api, command).await,
        ApiCommand::Analytics(command) => analytics(api, command).await,
    }
}

async fn users(api: &ApiClient, command: UsersCommand) -> anyhow::Result<Value> {
    match command {
        UsersCommand::List { page, search } => {
            let mut list = api.users().list(page.into()).await?;
            if let Some(needle) = search {
                list.users.retain(|user| user.matches(&needle));
            }
            to_json(list)
        }
        UsersCommand::Show { id } => to_json(api.users().get(&id).await?),
    }
}

async fn products(api: &ApiClient, command: ProductsCommand) -> anyhow::Result<Value> {
    let products = api.products();
    match command {
        ProductsCommand::List { page, search } => {
            let mut list = products.list(page.into()).await?;
            if let Some(needle) = search {
                list.products.retain(|product| product.matches(&needle));
            }
            to_json(list)
        }
        ProductsCommand::Show { id } => to_json(products.get(&id).await?),
        ProductsCommand::Create(args) => {
            let (draft, uploads) = args.prepare()?;
            to_json(products.create(&draft, &uploads).await?)
        }
        ProductsCommand::Update { id, product } => {
            let (draft, uploads) = product.prepare()?;
            to_json(products.update(&id, &draft, &uploads).await?)
        }
        ProductsCommand::Delete { id } => {
            products.delete(&id).await?;
            Ok(json!({ "deleted": id }))
        }
        ProductsCommand::Categories => to_json(products.list_categories().await?),
        ProductsCommand::AddCategory {
            name,
            description,
            inactive,
        } => {
            if name.trim().is_empty() {
                bail!("Category name is required");
            }
            let draft = CategoryDraft {
                name: name.trim().to_string(),
                description,
                is_active: !inactive,
            };
            to_json(products.create_category(&draft).await?)
        }
    }
}

async fn prices(api: &ApiClient, command: PricesCommand) -> anyhow::Result<Value> {
    let prices = api.prices();
    match command {
        PricesCommand::Latest { metal: Some(metal) } => to_json(prices.latest(metal).await?),
        PricesCommand::Latest { metal: None } => {
            let (gold, silver) = prices.latest_all().await?;
            Ok(json!({ "gold": to_json(gold)?, "silver": to_json(silver)? }))
        }
        PricesCommand::History { metal, range } => {
            to_json(prices.history(metal, range.start, range.end).await?)
        }
        PricesCommand::Set { metal, buy, sell } => {
            let update = PriceForm {
                metal_type: metal,
                buy_price: buy,
                sell_price: sell,
            }
            .validate()?;
            to_json(prices.update(&update).await?)
        }
    }
}

async fn refunds(api: &ApiClient, command: RefundsCommand) -> anyhow::Result<Value> {
    let payments = api.payments();
    match command {
        RefundsCommand::Initiate {
            order_id,
            amount,
            reason,
        } => {
            let (order_id, request) = RefundForm {
                order_id,
                amount,
                reason,
            }
            .validate()?;
            to_json(payments.initiate_refund(&order_id, &request).await?)
        }
        RefundsCommand::Status { order_id } => to_json(payments.refund_status(&order_id).await?),
        RefundsCommand::History => to_json(payments.refund_history().await?),
        RefundsCommand::List { page } => to_json(payments.refund_list(page.into()).await?),
    }
}

async fn orders(api: &ApiClient, command: OrdersCommand) -> anyhow::Result<Value> {
    let orders = api.orders();
    match command {
        OrdersCommand::List {
            stream,
            page,
            filters,
        } => {
            let params = filters.params(page);
            match stream {
                OrderStream::Gold => to_json(orders.purchases(MetalType::Gold, &params).await?),
                OrderStream::Silver => {
                    to_json(orders.purchases(MetalType::Silver, &params).await?)
                }
                OrderStream::Ornaments => to_json(orders.ornament_orders(&params).await?),
                OrderStream::Wallet => to_json(orders.wallet_transactions(&params).await?),
            }
        }
        OrdersCommand::Redemptions { page, filters } => {
            to_json(orders.redemptions(&filters.params(page)).await?)
        }
        OrdersCommand::Fulfill { order_id, status } => {
            let status = FulfillmentStatus::from(status.as_str());
            if !FulfillmentStatus::PIPELINE.contains(&status) {
                bail!(
                    "unknown fulfillment status '{status}' (expected pending, in_progress, \
                     ready_for_pickup or picked_up)"
                );
            }
            orders.update_fulfillment(&order_id, &status).await?;
            Ok(json!({ "orderId": order_id, "fulfillmentStatus": status.as_str() }))
        }
    }
}

async fn referrals(api: &ApiClient, command: ReferralsCommand) -> anyhow::Result<Value> {
    let referrals = api.referrals();
    match command {
        ReferralsCommand::Show { metal: Some(metal) } => to_json(referrals.config(metal).await?),
        ReferralsCommand::Show { metal: None } => {
            let (gold, silver) = tokio::join!(
                referrals.config(MetalType::Gold),
                referrals.config(MetalType::Silver)
            );
            Ok(json!({ "gold": to_json(gold?)?, "silver": to_json(silver?)? }))
        }
        ReferralsCommand::Set {
            metal,
            referrer_bonus,
            referee_bonus,
            min_investment,
        } => {
            let config = ReferralForm {
                metal_type: metal,
                referrer_bonus,
                referee_bonus,
                min_investment,
            }
            .validate()?;
            to_json(referrals.set_config(&config).await?)
        }
    }
}

async fn schemes(api: &ApiClient, command: SchemesCommand) -> anyhow::Result<Value> {
    let schemes = api.schemes();
    match command {
        SchemesCommand::List { skip, limit } => {
            to_json(schemes.list(PageParams::new(skip, limit)).await?)
        }
        SchemesCommand::Show { id } => to_json(schemes.get(&id).await?),
        SchemesCommand::Create {
            name,
            description,
            terms,
        } => {
            let mut draft = SchemeForm {
                name,
                description,
                terms_and_conditions: terms,
                is_active: true,
            }
            .validate()?;
            draft.is_active = None;
            to_json(schemes.create(&draft).await?)
        }
        SchemesCommand::Update {
            id,
            name,
            description,
            terms,
            active,
        } => {
            let current = schemes.get(&id).await?;
            let draft = SchemeForm {
                name: name.unwrap_or(current.name),
                description: description.or(current.description).unwrap_or_default(),
                terms_and_conditions: terms
                    .or(current.terms_and_conditions)
                    .unwrap_or_default(),
                is_active: active.unwrap_or(current.is_active),
            }
            .validate()?;
            to_json(schemes.update(&id, &draft).await?)
        }
        SchemesCommand::Delete { id } => {
            schemes.delete(&id).await?;
            Ok(json!({ "deleted": id }))
        }
    }
}

async fn analytics(api: &ApiClient, command: AnalyticsCommand) -> anyhow::Result<Value> {
    let analytics = api.analytics();
    match command {
        AnalyticsCommand::Summary { range } => {
            to_json(analytics.summary(range.start, range.end).await?)
        }
        AnalyticsCommand::Dashboard {
            range,
            refund_skip,
            refund_limit,
        } => {
            let params = DashboardParams {
                start_date: range.start.map(|date| date.to_string()),
                end_date: range.end.map(|date| date.to_string()),
                refund_skip,
                refund_limit,
            };
            to_json(analytics.dashboard(&params).await?)
        }
    }
}
