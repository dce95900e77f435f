use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::api::ApiResult;
use crate::config::{ConfigStore, UiConfig};
use crate::query::{QueryKey, QueryStatus};
use crate::ui::confirm::{ConfirmDialogState, ConfirmIntent, ConfirmReducer};
use crate::ui::form::{
    product_fields, referral_fields, scheme_fields, to_submission, FormDialogState, FormField,
    FormIntent, FormKind, FormReducer,
};
use crate::ui::mvi::Reducer;
use crate::ui::notifications::{Level, Notifications};
use crate::ui::pages::dashboard;
use crate::ui::pages::orders::OrdersView;
use crate::ui::pages::payments::PaymentsView;
use crate::ui::pages::pricing::PricingView;
use crate::ui::pages::products::ProductsView;
use crate::ui::pages::referrals::{self, ReferralsView};
use crate::ui::pages::scheme_detail::SchemeDetailView;
use crate::ui::pages::schemes::{self, SchemesView};
use crate::ui::pages::user_detail::{history_len, UserDetailView};
use crate::ui::pages::users::{UserSort, UsersView};
use crate::ui::pages::Page;
use crate::worker::{Mutation, Resource, ResourceData, UiCommand, UiCommandSender, WorkerEvent};

/// Page size of the schemes list.
const SCHEMES_PAGE: u32 = 10;

const SESSION_EXPIRED: &str = "Session expired. Run `bullion-admin login` and restart the console";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Page,
    Search,
    /// Typing goes to the page's embedded form.
    InlineForm,
}

/// Which form state an intent is meant for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum FormTarget {
    Dialog,
    Refund,
    Price,
}

impl FormTarget {
    /// Form that issued `mutation`, if it came from one.
    fn of(mutation: &Mutation) -> Option<FormTarget> {
        match mutation {
            Mutation::InitiateRefund { .. } => Some(FormTarget::Refund),
            Mutation::UpdatePrice(_) => Some(FormTarget::Price),
            Mutation::SetReferral(_)
            | Mutation::CreateScheme(_)
            | Mutation::UpdateScheme { .. }
            | Mutation::CreateProduct { .. }
            | Mutation::UpdateProduct { .. } => Some(FormTarget::Dialog),
            Mutation::DeleteScheme { .. }
            | Mutation::DeleteProduct { .. }
            | Mutation::UpdateFulfillment { .. } => None,
        }
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    page: Page,
    focus: Focus,
    config: ConfigStore,
    ui: UiConfig,
    api_url: String,
    session_email: Option<String>,
    session_expired: bool,
    commands: Option<UiCommandSender>,
    last_command_error: Option<String>,
    /// Latest status per read; absent means never requested.
    statuses: HashMap<Resource, QueryStatus<ResourceData>>,
    /// Outstanding requests per read. A read can be re-requested before
    /// the previous request settles.
    in_flight: HashMap<Resource, usize>,
    idle: QueryStatus<ResourceData>,
    users: UsersView,
    user_detail: Option<UserDetailView>,
    products: ProductsView,
    pricing: PricingView,
    payments: PaymentsView,
    orders: OrdersView,
    referrals: ReferralsView,
    schemes: SchemesView,
    scheme_detail: Option<SchemeDetailView>,
    /// Modal form (referrals, schemes, products).
    dialog: FormDialogState,
    refund_form: FormDialogState,
    price_form: FormDialogState,
    confirm: ConfirmDialogState,
    notifications: Notifications,
}

impl App {
    pub fn new(config: ConfigStore, session_email: Option<String>) -> Self {
        let snapshot = config.get();
        let ui = snapshot.ui.clone();
        let mut app = Self {
            should_quit: false,
            page: Page::Dashboard,
            focus: Focus::Page,
            config,
            api_url: snapshot.api.base_url.clone(),
            session_email,
            session_expired: false,
            commands: None,
            last_command_error: None,
            statuses: HashMap::new(),
            in_flight: HashMap::new(),
            idle: QueryStatus::Idle,
            users: UsersView::new(ui.page_size),
            user_detail: None,
            products: ProductsView::new(ui.page_size),
            pricing: PricingView::default(),
            payments: PaymentsView::new(ui.load_more_limit),
            orders: OrdersView::new(ui.load_more_limit),
            referrals: ReferralsView::default(),
            schemes: SchemesView::new(SCHEMES_PAGE),
            scheme_detail: None,
            dialog: FormDialogState::default(),
            refund_form: FormDialogState::default(),
            price_form: FormDialogState::default(),
            confirm: ConfirmDialogState::default(),
            notifications: Notifications::new(Duration::from_secs(ui.notification_seconds)),
            ui,
        };
        for (target, kind) in [
            (FormTarget::Refund, FormKind::Refund),
            (FormTarget::Price, FormKind::PriceUpdate),
        ] {
            let fields = kind.blank_fields();
            app.dispatch_form(target, FormIntent::Open { kind, fields });
        }
        app
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.commands = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn ui_config(&self) -> &UiConfig {
        &self.ui
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn session_email(&self) -> Option<&str> {
        self.session_email.as_deref()
    }

    pub fn session_expired(&self) -> bool {
        self.session_expired
    }

    pub fn last_command_error(&self) -> Option<&str> {
        self.last_command_error.as_deref()
    }

    pub fn config_path(&self) -> &std::path::Path {
        self.config.path()
    }

    // ========================================================================
    // Reads
    // ========================================================================

    pub fn status(&self, resource: &Resource) -> &QueryStatus<ResourceData> {
        self.statuses.get(resource).unwrap_or(&self.idle)
    }

    /// Whether a request for `resource` is outstanding.
    pub fn is_fetching(&self, resource: &Resource) -> bool {
        self.in_flight.contains_key(resource)
    }

    pub fn any_fetching(&self) -> bool {
        !self.in_flight.is_empty()
    }

    fn users_resource(&self) -> Resource {
        Resource::Users {
            limit: self.ui.list_fetch_limit,
        }
    }

    fn products_resource(&self) -> Resource {
        Resource::Products {
            limit: self.ui.list_fetch_limit,
        }
    }

    /// Reads the current screen depends on.
    pub fn active_resources(&self) -> Vec<Resource> {
        match self.page {
            Page::Dashboard => dashboard::resources(),
            Page::Users => vec![self.users_resource()],
            Page::UserDetail => self
                .user_detail
                .as_ref()
                .map(UserDetailView::resources)
                .unwrap_or_default(),
            Page::Products => vec![self.products_resource()],
            Page::Pricing => self.pricing.resources(),
            Page::Payments => vec![self.payments.first_page()],
            Page::Orders => self.orders.first_pages(),
            Page::Referrals => self.referrals.resources(),
            Page::Schemes => vec![self.schemes.resource()],
            Page::SchemeDetail => self
                .scheme_detail
                .as_ref()
                .map(|view| vec![view.resource()])
                .unwrap_or_default(),
        }
    }

    fn request(&mut self, resource: Resource, force: bool) {
        let status = self.statuses.remove(&resource).unwrap_or_default().begin();
        self.statuses.insert(resource.clone(), status);
        *self.in_flight.entry(resource.clone()).or_default() += 1;
        let sent = self.send_command(UiCommand::Fetch {
            resource: resource.clone(),
            force,
        });
        if !sent {
            self.settle_in_flight(&resource);
            let message = self
                .last_command_error
                .clone()
                .unwrap_or_else(|| "API worker is not running".to_string());
            self.statuses.insert(resource, QueryStatus::Error(message));
        }
    }

    /// Issues every read of the current screen.
    pub fn load_page(&mut self, force: bool) {
        for resource in self.active_resources() {
            self.request(resource, force);
        }
    }

    pub fn refresh(&mut self) {
        self.load_page(true);
    }

    /// Re-issues mounted reads whose key falls under an invalidated prefix.
    fn refetch_invalidated(&mut self, prefixes: &[QueryKey]) {
        for resource in self.active_resources() {
            let key = resource.key();
            if prefixes.iter().any(|prefix| key.starts_with(prefix)) {
                self.request(resource, false);
            }
        }
    }

    // ========================================================================
    // Worker events
    // ========================================================================

    pub fn on_worker_event(&mut self, event: WorkerEvent) {
        match event {
            WorkerEvent::Fetched { resource, result } => self.on_fetched(resource, result),
            WorkerEvent::Mutated { mutation, result } => match result {
                Ok(message) => self.on_mutation_succeeded(mutation, message),
                Err(err) => {
                    if err.is_unauthorized() {
                        self.flag_session_expired();
                    }
                    let message = mutation.failure_message(&err);
                    self.notifications.error(message.clone());
                    if let Some(target) = FormTarget::of(&mutation) {
                        self.dispatch_form(target, FormIntent::Failed { message });
                    }
                }
            },
        }
    }

    fn settle_in_flight(&mut self, resource: &Resource) {
        if let Some(count) = self.in_flight.get_mut(resource) {
            *count -= 1;
            if *count == 0 {
                self.in_flight.remove(resource);
            }
        }
    }

    fn on_fetched(&mut self, resource: Resource, result: ApiResult<ResourceData>) {
        self.settle_in_flight(&resource);
        match &result {
            Ok(data) => self.fold_page(&resource, data),
            Err(err) => {
                if err.is_unauthorized() {
                    self.flag_session_expired();
                }
                tracing::debug!(key = %resource.key(), error = %err, "read failed");
                self.discard_pages(&resource);
            }
        }
        let status = QueryStatus::settle(result.map_err(|err| err.user_message()));
        self.statuses.insert(resource, status);
        self.clamp_selection();
    }

    /// Feeds Load-More pages into their accumulators.
    fn fold_page(&mut self, resource: &Resource, data: &ResourceData) {
        let applied = match (resource, data) {
            (Resource::Orders { stream, skip, .. }, data) => self.orders.apply(*stream, *skip, data),
            (Resource::Refunds { skip, .. }, ResourceData::Refunds(page)) => self
                .payments
                .refunds
                .apply_page(*skip, page.refunds.clone(), page.total),
            _ => return,
        };
        if !applied {
            tracing::debug!(key = %resource.key(), "dropped out-of-order page");
        }
    }

    /// A failed first page drops the rows accumulated behind it; a failed
    /// "load more" keeps them and says so.
    fn discard_pages(&mut self, resource: &Resource) {
        match resource {
            Resource::Orders { stream, skip: 0, .. } => self.orders.reset(*stream),
            Resource::Refunds { skip: 0, .. } => self.payments.refunds.reset(),
            Resource::Orders { .. } | Resource::Refunds { .. } => {
                self.notifications.error("Failed to load more rows");
            }
            _ => {}
        }
    }

    fn on_mutation_succeeded(&mut self, mutation: Mutation, message: String) {
        self.notifications.success(message);
        if let Some(target) = FormTarget::of(&mutation) {
            self.dispatch_form(target, FormIntent::Succeeded);
        }
        self.refetch_invalidated(&mutation.invalidates());
    }

    fn flag_session_expired(&mut self) {
        if !self.session_expired {
            self.session_expired = true;
            self.notifications.error(SESSION_EXPIRED);
        }
    }

    // ========================================================================
    // Navigation and selection
    // ========================================================================

    pub fn navigate(&mut self, page: Page) {
        let detached = match page {
            Page::UserDetail => self.user_detail.is_none(),
            Page::SchemeDetail => self.scheme_detail.is_none(),
            _ => false,
        };
        if detached {
            return;
        }
        self.page = page;
        self.focus = Focus::Page;
        self.load_page(false);
    }

    pub fn go_back(&mut self) {
        match self.page {
            Page::UserDetail => self.navigate(Page::Users),
            Page::SchemeDetail => self.navigate(Page::Schemes),
            _ => {}
        }
    }

    pub fn on_tick(&mut self) {
        self.notifications.expire(Instant::now());
    }

    fn selection_len(&self) -> usize {
        match self.page {
            Page::Users => match self.status(&self.users_resource()).data() {
                Some(ResourceData::Users(list)) => {
                    let visible = self.users.visible(&list.users);
                    self.users.index.slice(&visible).len()
                }
                _ => 0,
            },
            Page::Products => match self.status(&self.products_resource()).data() {
                Some(ResourceData::Products(list)) => {
                    let visible = self.products.visible(&list.products);
                    self.products.index.slice(&visible).len()
                }
                _ => 0,
            },
            Page::UserDetail => self
                .user_detail
                .as_ref()
                .map_or(0, |view| history_len(self.status(&view.history()).data())),
            Page::Orders => self.orders.row_count(),
            Page::Schemes => match self.status(&self.schemes.resource()).data() {
                Some(ResourceData::Schemes(list)) => list.schemes.len(),
                _ => 0,
            },
            Page::Dashboard
            | Page::Pricing
            | Page::Payments
            | Page::Referrals
            | Page::SchemeDetail => 0,
        }
    }

    fn selection_mut(&mut self) -> Option<&mut usize> {
        match self.page {
            Page::Users => Some(&mut self.users.selected),
            Page::Products => Some(&mut self.products.selected),
            Page::UserDetail => self.user_detail.as_mut().map(|view| &mut view.selected),
            Page::Orders => Some(&mut self.orders.selected),
            Page::Schemes => Some(&mut self.schemes.selected),
            Page::Dashboard
            | Page::Pricing
            | Page::Payments
            | Page::Referrals
            | Page::SchemeDetail => None,
        }
    }

    pub fn move_selection(&mut self, delta: isize) {
        if self.page == Page::Referrals {
            self.referrals.selected = self.referrals.selected.other();
            return;
        }
        let len = self.selection_len();
        if let Some(selected) = self.selection_mut() {
            let max = len.saturating_sub(1) as isize;
            *selected = (*selected as isize + delta).clamp(0, max) as usize;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.selection_len();
        if let Some(selected) = self.selection_mut() {
            *selected = (*selected).min(len.saturating_sub(1));
        }
    }

    pub fn next_tab(&mut self, forward: bool) {
        match self.page {
            Page::Orders if forward => self.orders.next_tab(),
            Page::Orders => self.orders.prev_tab(),
            Page::UserDetail => {
                let Some(view) = self.user_detail.as_mut() else {
                    return;
                };
                if forward {
                    view.next_tab();
                } else {
                    view.prev_tab();
                }
                let history = view.history();
                self.request(history, false);
            }
            Page::Pricing => {
                self.pricing.toggle_history();
                self.request(Resource::PriceHistory(self.pricing.history_metal), false);
            }
            Page::Referrals => self.referrals.selected = self.referrals.selected.other(),
            Page::SchemeDetail => {
                if let Some(view) = self.scheme_detail.as_mut() {
                    view.tab = view.tab.other();
                }
            }
            _ => {}
        }
    }

    /// Moves a page-indexed or offset-paged list by one page.
    pub fn turn_page(&mut self, forward: bool) {
        match self.page {
            Page::Users => {
                let len = match self.status(&self.users_resource()).data() {
                    Some(ResourceData::Users(list)) => self.users.visible(&list.users).len(),
                    _ => 0,
                };
                if forward {
                    self.users.index.next(len);
                } else {
                    self.users.index.prev();
                }
                self.users.selected = 0;
            }
            Page::Products => {
                let len = match self.status(&self.products_resource()).data() {
                    Some(ResourceData::Products(list)) => {
                        self.products.visible(&list.products).len()
                    }
                    _ => 0,
                };
                if forward {
                    self.products.index.next(len);
                } else {
                    self.products.index.prev();
                }
                self.products.selected = 0;
            }
            Page::Schemes => {
                let before = self.schemes.skip;
                if forward {
                    let total = schemes::total(self.status(&self.schemes.resource()));
                    self.schemes.next(total);
                } else {
                    self.schemes.prev();
                }
                if self.schemes.skip != before {
                    self.request(self.schemes.resource(), false);
                }
            }
            _ => {}
        }
    }

    /// Requests the next server page of a Load-More list.
    pub fn load_more(&mut self) {
        let next = match self.page {
            Page::Orders => self.orders.next_page(),
            Page::Payments => self.payments.next_page(),
            _ => None,
        };
        if let Some(resource) = next {
            if !self.is_fetching(&resource) {
                self.request(resource, false);
            }
        }
    }

    // ========================================================================
    // Search and sort
    // ========================================================================

    pub fn is_searching(&self) -> bool {
        self.focus == Focus::Search
    }

    pub fn start_search(&mut self) {
        if self.page.is_searchable() {
            self.focus = Focus::Search;
        }
    }

    /// Leaves search mode; `clear` also drops the query.
    pub fn stop_search(&mut self, clear: bool) {
        self.focus = Focus::Page;
        if clear {
            self.edit_search(|search| search.clear());
        }
    }

    pub fn search_input(&mut self, ch: char) {
        self.edit_search(|search| search.push(ch));
    }

    pub fn search_backspace(&mut self) {
        self.edit_search(|search| {
            search.pop();
        });
    }

    fn edit_search(&mut self, edit: impl FnOnce(&mut String)) {
        match self.page {
            Page::Users => {
                let mut search = self.users.search.clone();
                edit(&mut search);
                self.users.set_search(search);
            }
            Page::Products => {
                let mut search = self.products.search.clone();
                edit(&mut search);
                self.products.set_search(search);
            }
            _ => {}
        }
    }

    pub fn sort_users(&mut self, field: UserSort) {
        if self.page == Page::Users {
            self.users.sort_by(field);
            self.users.selected = 0;
        }
    }

    // ========================================================================
    // Row actions
    // ========================================================================

    /// Enter on a row: opens a user or scheme, or starts an edit.
    pub fn open_selected(&mut self) {
        match self.page {
            Page::Users => {
                let id = match self.status(&self.users_resource()).data() {
                    Some(ResourceData::Users(list)) => self
                        .users
                        .selected_user(&list.users)
                        .map(|user| user.id.clone()),
                    _ => None,
                };
                if let Some(id) = id {
                    self.user_detail = Some(UserDetailView::new(id, self.ui.list_fetch_limit));
                    self.navigate(Page::UserDetail);
                }
            }
            Page::Schemes => {
                let id = self
                    .schemes
                    .selected_scheme(self.status(&self.schemes.resource()))
                    .map(|scheme| scheme.id.clone());
                if let Some(id) = id {
                    self.scheme_detail = Some(SchemeDetailView::new(id));
                    self.navigate(Page::SchemeDetail);
                }
            }
            Page::Referrals => self.edit_selected(),
            Page::Payments | Page::Pricing => self.focus_inline_form(),
            _ => {}
        }
    }

    pub fn edit_selected(&mut self) {
        match self.page {
            Page::Referrals => {
                let metal = self.referrals.selected;
                let kind = FormKind::Referral(metal);
                let fields = referrals::config(self, metal)
                    .map(|config| referral_fields(&config))
                    .unwrap_or_else(|| kind.blank_fields());
                self.open_dialog(kind, fields);
            }
            Page::Schemes => {
                let Some(scheme) = self
                    .schemes
                    .selected_scheme(self.status(&self.schemes.resource()))
                    .cloned()
                else {
                    return;
                };
                self.open_dialog(
                    FormKind::SchemeEdit {
                        id: scheme.id.clone(),
                    },
                    scheme_fields(&scheme),
                );
            }
            Page::SchemeDetail => {
                let Some(scheme) = self
                    .scheme_detail
                    .as_ref()
                    .and_then(|view| view.scheme(self.status(&view.resource())))
                    .cloned()
                else {
                    return;
                };
                self.open_dialog(
                    FormKind::SchemeEdit {
                        id: scheme.id.clone(),
                    },
                    scheme_fields(&scheme),
                );
            }
            Page::Products => {
                let product = match self.status(&self.products_resource()).data() {
                    Some(ResourceData::Products(list)) => {
                        self.products.selected_product(&list.products).cloned()
                    }
                    _ => None,
                };
                let Some(product) = product else {
                    return;
                };
                self.open_dialog(
                    FormKind::ProductEdit {
                        id: product.id.clone(),
                    },
                    product_fields(&product),
                );
            }
            _ => {}
        }
    }

    pub fn new_record(&mut self) {
        let kind = match self.page {
            Page::Schemes => FormKind::SchemeCreate,
            Page::Products => FormKind::ProductCreate,
            _ => return,
        };
        let fields = kind.blank_fields();
        self.open_dialog(kind, fields);
    }

    /// Asks before deleting the selected product or scheme.
    pub fn delete_selected(&mut self) {
        let target = match self.page {
            Page::Products => match self.status(&self.products_resource()).data() {
                Some(ResourceData::Products(list)) => {
                    self.products
                        .selected_product(&list.products)
                        .map(|product| {
                            (
                                "Delete Product",
                                format!("Delete '{}'? This cannot be undone.", product.name),
                                Mutation::DeleteProduct {
                                    id: product.id.clone(),
                                },
                            )
                        })
                }
                _ => None,
            },
            Page::Schemes => self
                .schemes
                .selected_scheme(self.status(&self.schemes.resource()))
                .map(|scheme| {
                    (
                        "Delete Scheme",
                        format!("Delete scheme '{}'?", scheme.name),
                        Mutation::DeleteScheme {
                            id: scheme.id.clone(),
                        },
                    )
                }),
            _ => None,
        };
        if let Some((title, message, action)) = target {
            dispatch_mvi!(
                self,
                confirm,
                ConfirmReducer,
                ConfirmIntent::Ask {
                    title: title.to_string(),
                    message,
                    action,
                }
            );
        }
    }

    /// Moves the selected ornament order to the next fulfillment stage.
    pub fn advance_fulfillment(&mut self) {
        let order = match self.page {
            Page::Orders => self.orders.selected_ornament().cloned(),
            Page::UserDetail => self.user_detail.as_ref().and_then(|view| {
                view.selected_ornament(self.status(&view.history())).cloned()
            }),
            _ => None,
        };
        let Some(order) = order else {
            return;
        };
        let current = order.effective_fulfillment();
        let next = current.next();
        if next == current {
            self.notifications
                .push(Level::Info, format!("Order is already {}", current.label()));
            return;
        }
        self.send_command(UiCommand::Mutate(Mutation::UpdateFulfillment {
            order_id: order.id,
            status: next,
        }));
    }

    // ========================================================================
    // Confirm dialog (MVI pattern)
    // ========================================================================

    pub fn confirm(&self) -> &ConfirmDialogState {
        &self.confirm
    }

    pub fn confirm_accept(&mut self) {
        let action = self.confirm.action().cloned();
        dispatch_mvi!(self, confirm, ConfirmReducer, ConfirmIntent::Confirm);
        if let Some(action) = action {
            self.send_command(UiCommand::Mutate(action));
        }
    }

    pub fn confirm_cancel(&mut self) {
        dispatch_mvi!(self, confirm, ConfirmReducer, ConfirmIntent::Cancel);
    }

    // ========================================================================
    // Forms (MVI pattern)
    // ========================================================================

    pub fn dialog(&self) -> &FormDialogState {
        &self.dialog
    }

    pub fn refund_form(&self) -> &FormDialogState {
        &self.refund_form
    }

    pub fn price_form(&self) -> &FormDialogState {
        &self.price_form
    }

    /// Whether the page's embedded form has keyboard focus.
    pub fn inline_form_active(&self) -> bool {
        self.focus == Focus::InlineForm
    }

    pub fn focus_inline_form(&mut self) {
        if self.inline_target().is_some() {
            self.focus = Focus::InlineForm;
        }
    }

    /// Whether key presses go to a form.
    pub fn form_active(&self) -> bool {
        self.active_form().is_some()
    }

    fn inline_target(&self) -> Option<FormTarget> {
        match self.page {
            Page::Payments => Some(FormTarget::Refund),
            Page::Pricing => Some(FormTarget::Price),
            _ => None,
        }
    }

    fn active_form(&self) -> Option<FormTarget> {
        if self.dialog.is_visible() {
            Some(FormTarget::Dialog)
        } else if self.focus == Focus::InlineForm {
            self.inline_target()
        } else {
            None
        }
    }

    fn form(&self, target: FormTarget) -> &FormDialogState {
        match target {
            FormTarget::Dialog => &self.dialog,
            FormTarget::Refund => &self.refund_form,
            FormTarget::Price => &self.price_form,
        }
    }

    fn dispatch_form(&mut self, target: FormTarget, intent: FormIntent) {
        match target {
            FormTarget::Dialog => {
                dispatch_mvi!(self, dialog, FormReducer, intent);
            }
            FormTarget::Refund => {
                dispatch_mvi!(self, refund_form, FormReducer, intent);
            }
            FormTarget::Price => {
                dispatch_mvi!(self, price_form, FormReducer, intent);
            }
        }
    }

    fn open_dialog(&mut self, kind: FormKind, fields: Vec<FormField>) {
        self.dispatch_form(FormTarget::Dialog, FormIntent::Open { kind, fields });
    }

    /// Sends an editing intent to whichever form has focus.
    pub fn form_intent(&mut self, intent: FormIntent) {
        if let Some(target) = self.active_form() {
            self.dispatch_form(target, intent);
        }
    }

    /// Esc inside a form: closes a dialog, or hands focus back to the page.
    pub fn leave_form(&mut self) {
        match self.active_form() {
            Some(FormTarget::Dialog) => self.dispatch_form(FormTarget::Dialog, FormIntent::Close),
            Some(_) => self.focus = Focus::Page,
            None => {}
        }
    }

    /// Validates the focused form and sends its write.
    pub fn submit_form(&mut self) {
        let Some(target) = self.active_form() else {
            return;
        };
        let state = self.form(target);
        if !matches!(state, FormDialogState::Open { .. }) {
            return;
        }
        let Some(kind) = state.kind().cloned() else {
            return;
        };
        match to_submission(&kind, state.fields()) {
            Err(err) => {
                let message = err.to_string();
                self.notifications.error(message.clone());
                self.dispatch_form(target, FormIntent::Rejected { message });
            }
            Ok(submission) => {
                for warning in submission.warnings {
                    self.notifications.error(warning);
                }
                self.dispatch_form(target, FormIntent::Submitted);
                if !self.send_command(UiCommand::Mutate(submission.mutation)) {
                    let message = self
                        .last_command_error
                        .clone()
                        .unwrap_or_else(|| "API worker is not running".to_string());
                    self.dispatch_form(target, FormIntent::Failed { message });
                }
            }
        }
    }

    // ========================================================================
    // Views
    // ========================================================================

    pub fn users_view(&self) -> &UsersView {
        &self.users
    }

    pub fn user_detail_view(&self) -> Option<&UserDetailView> {
        self.user_detail.as_ref()
    }

    pub fn products_view(&self) -> &ProductsView {
        &self.products
    }

    pub fn pricing_view(&self) -> &PricingView {
        &self.pricing
    }

    pub fn payments_view(&self) -> &PaymentsView {
        &self.payments
    }

    pub fn orders_view(&self) -> &OrdersView {
        &self.orders
    }

    pub fn referrals_view(&self) -> &ReferralsView {
        &self.referrals
    }

    pub fn schemes_view(&self) -> &SchemesView {
        &self.schemes
    }

    pub fn scheme_detail_view(&self) -> Option<&SchemeDetailView> {
        self.scheme_detail.as_ref()
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.commands else {
            self.last_command_error = Some("API worker is not running".to_string());
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => {
                self.last_command_error = None;
                true
            }
            Err(err) => {
                let message = format!("Command queue unavailable: {err}");
                tracing::warn!("{message}");
                self.notifications.error(message.clone());
                self.last_command_error = Some(message);
                false
            }
        }
    }
}
