//! Browser abilities, in both realizations.
//!
//! The handle types are whatever the automation driver hands out (a page, a
//! browser, a browser context). They are passed through untouched, so any
//! cloneable handle works, including [`MockPage`](crate::mock::MockPage).

use crate::ability::Ability;
use crate::result::ScreenplayResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Handles bundled by [`UseBrowser`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserCapability<B, P> {
    /// Browser handle
    pub browser: B,
    /// Page handle
    pub page: P,
}

/// Handles bundled by [`UseBrowserContext`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserContextCapability<C, B, P> {
    /// Browser context handle
    pub context: C,
    /// Browser handle
    pub browser: B,
    /// Page handle
    pub page: P,
}

/// Ability to drive a single page
#[derive(Debug, Clone)]
pub struct UsePage<P> {
    page: P,
}

impl<P> UsePage<P> {
    /// Wrap a page handle
    #[must_use]
    pub const fn new(page: P) -> Self {
        Self { page }
    }
}

#[async_trait]
impl<P> Ability for UsePage<P>
where
    P: Clone + Send + Sync + 'static,
{
    type Capability = P;

    async fn can(&self) -> ScreenplayResult<P> {
        Ok(self.page.clone())
    }
}

/// Ability to drive a browser and one of its pages
#[derive(Debug, Clone)]
pub struct UseBrowser<B, P> {
    browser: B,
    page: P,
}

impl<B, P> UseBrowser<B, P> {
    /// Wrap browser and page handles
    #[must_use]
    pub const fn new(browser: B, page: P) -> Self {
        Self { browser, page }
    }
}

#[async_trait]
impl<B, P> Ability for UseBrowser<B, P>
where
    B: Clone + Send + Sync + 'static,
    P: Clone + Send + Sync + 'static,
{
    type Capability = BrowserCapability<B, P>;

    async fn can(&self) -> ScreenplayResult<BrowserCapability<B, P>> {
        Ok(BrowserCapability {
            browser: self.browser.clone(),
            page: self.page.clone(),
        })
    }
}

/// Ability to drive a browser context, its browser and one of its pages
#[derive(Debug, Clone)]
pub struct UseBrowserContext<C, B, P> {
    context: C,
    browser: B,
    page: P,
}

impl<C, B, P> UseBrowserContext<C, B, P> {
    /// Wrap context, browser and page handles
    #[must_use]
    pub const fn new(context: C, browser: B, page: P) -> Self {
        Self {
            context,
            browser,
            page,
        }
    }
}

#[async_trait]
impl<C, B, P> Ability for UseBrowserContext<C, B, P>
where
    C: Clone + Send + Sync + 'static,
    B: Clone + Send + Sync + 'static,
    P: Clone + Send + Sync + 'static,
{
    type Capability = BrowserContextCapability<C, B, P>;

    async fn can(&self) -> ScreenplayResult<BrowserContextCapability<C, B, P>> {
        Ok(BrowserContextCapability {
            context: self.context.clone(),
            browser: self.browser.clone(),
            page: self.page.clone(),
        })
    }
}

/// Function ability handing back the page it is given.
///
/// Register with `AbilityFn::new(use_page::<P>)`.
///
/// # Errors
///
/// Never fails.
pub fn use_page<P>(page: P) -> ScreenplayResult<P> {
    Ok(page)
}

/// Function ability bundling a browser and a page.
///
/// # Errors
///
/// Never fails.
pub fn use_browser<B, P>((browser, page): (B, P)) -> ScreenplayResult<BrowserCapability<B, P>> {
    Ok(BrowserCapability { browser, page })
}

/// Function ability bundling a browser context, a browser and a page.
///
/// # Errors
///
/// Never fails.
pub fn use_browser_context<C, B, P>(
    (context, browser, page): (C, B, P),
) -> ScreenplayResult<BrowserContextCapability<C, B, P>> {
    Ok(BrowserContextCapability {
        context,
        browser,
        page,
    })
}
