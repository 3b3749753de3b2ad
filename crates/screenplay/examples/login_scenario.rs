//! Login scenario written in both realizations against a recording page.
//!
//! Run with: `SCREENPLAY_LOG=screenplay=debug cargo run --example login_scenario`

use screenplay::logging::init_tracing;
use screenplay::mock::MockPage;
use screenplay::prelude::*;
use screenplay::{use_page, ScreenplayConfig, UsePage};

type Page = UsePage<MockPage>;

struct Fill {
    selector: &'static str,
    text: &'static str,
}

#[async_trait]
impl Interaction for Fill {
    type Output = ();

    async fn attempt_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        let page = actor.use_ability::<Page>().await?;
        page.fill(self.selector, self.text).await
    }
}

struct Click(&'static str);

#[async_trait]
impl Interaction for Click {
    type Output = ();

    async fn attempt_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        let page = actor.use_ability::<Page>().await?;
        page.click(self.0).await
    }
}

struct Navigate(&'static str);

#[async_trait]
impl Interaction for Navigate {
    type Output = ();

    async fn attempt_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        let page = actor.use_ability::<Page>().await?;
        page.goto(self.0).await
    }
}

struct LogIn {
    steps: Interactions,
}

impl LogIn {
    fn as_user(user: &'static str) -> Self {
        Self {
            steps: Interactions::new()
                .with(Navigate("https://example.com/login"))
                .with(Fill {
                    selector: "#username",
                    text: user,
                })
                .with(Click("#submit"))
                .with(Navigate("https://example.com/home")),
        }
    }
}

#[async_trait]
impl Task for LogIn {
    type Output = ();

    fn interactions(&self) -> &Interactions {
        &self.steps
    }

    async fn perform_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        self.attempt_interactions_as(actor).await
    }
}

struct CurrentUrl;

#[async_trait]
impl Question for CurrentUrl {
    type Answer = String;

    async fn ask_as(&self, actor: &Actor) -> ScreenplayResult<String> {
        Ok(actor.use_ability::<Page>().await?.url().await)
    }
}

fn login_page() -> MockPage {
    MockPage::new()
        .with_element("#username")
        .with_element("#submit")
}

#[tokio::main]
async fn main() -> ScreenplayResult<()> {
    let _ = init_tracing();
    let config = ScreenplayConfig::from_env()?;

    println!("=== Class realization ===\n");
    let page = login_page();
    let alice = Actor::builder()
        .config(config.clone())
        .named("alice")
        .who_can(UsePage::new(page.clone()))
        .build();

    alice.performs(Performance::task(&LogIn::as_user("alice"))).await?;
    alice
        .asserts(&CurrentUrl, |url| {
            Assertion::equals("https://example.com/home", url.as_str())
        })
        .await?;
    println!("  calls: {:?}", page.history());

    println!("\n=== Functional realization ===\n");
    let page = login_page();
    let page_ability = AbilityFn::new(use_page::<MockPage>);
    let bob = FnActor::with_config([page_ability.handle()], config.actor_name("bob"));

    performs(&bob, |actor| {
        let page_ability = page_ability.clone();
        let page = page.clone();
        async move {
            let page = use_ability(&actor, &page_ability, page).await?;
            page.goto("https://example.com/login").await?;
            page.fill("#username", "bob").await?;
            page.click("#submit").await
        }
    })
    .await?;
    asserts(
        &bob,
        |_| {
            let page = page.clone();
            async move { Ok::<_, ScreenplayError>(page.text_content("#username").await) }
        },
        |text| Assertion::is_some(&text),
    )
    .await?;
    println!("  calls: {:?}", page.history());

    Ok(())
}
