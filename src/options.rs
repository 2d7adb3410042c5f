//! Rendering options for a single screenshot request.
//!
//! [`TakeOptions`] accumulates query parameters in insertion order. Order is
//! load-bearing: the server recomputes the request signature over the
//! parameters in exactly the order they were added, so the builder stores
//! them as an ordered list rather than a map.

/// The set of rendering options for one screenshot request.
///
/// Created with one of the source factories ([`TakeOptions::url`],
/// [`TakeOptions::html`], [`TakeOptions::markdown`]) and extended with
/// chained setter calls. Each setter encodes its argument into the final
/// wire-format string the API expects; no range validation happens on the
/// client side, the server is the authority on value domains.
///
/// Setting the same parameter twice is an error. The chain stays fluent, so
/// the duplicate is recorded here and reported when the options are handed
/// to [`Client::generate_take_url`](crate::Client::generate_take_url).
///
/// # Example
/// ```
/// use screenshotone::{Format, TakeOptions};
///
/// let options = TakeOptions::url("https://example.com")
///     .full_page(true)
///     .format(Format::Png)
///     .block_ads(true);
/// ```
#[derive(Debug, Clone)]
pub struct TakeOptions {
    query: Vec<(String, Vec<String>)>,
    duplicate: Option<String>,
}

impl TakeOptions {
    fn with_source(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            query: vec![(key.to_string(), vec![value.into()])],
            duplicate: None,
        }
    }

    /// Take a screenshot of the page at the given URL.
    pub fn url(url: impl Into<String>) -> Self {
        Self::with_source("url", url)
    }

    /// Render the given HTML and take a screenshot of it.
    pub fn html(html: impl Into<String>) -> Self {
        Self::with_source("html", html)
    }

    /// Render the given Markdown and take a screenshot of it.
    pub fn markdown(markdown: impl Into<String>) -> Self {
        Self::with_source("markdown", markdown)
    }

    /// A CSS-like selector of the element to take a screenshot of.
    pub fn selector(self, selector: impl Into<String>) -> Self {
        self.add_one("selector", selector.into())
    }

    /// Sets the response format.
    pub fn format(self, format: Format) -> Self {
        self.add_one("format", format.as_str())
    }

    /// Sets the response type. `by_format` (the default) returns the
    /// rendered result; `empty` returns only the status, which is useful
    /// when uploading straight to storage.
    pub fn response_type(self, response_type: ResponseType) -> Self {
        self.add_one("response_type", response_type.as_str())
    }

    /// Renders the full page instead of just the viewport.
    pub fn full_page(self, full_page: bool) -> Self {
        self.add_one("full_page", full_page.to_string())
    }

    /// Scrolls to the bottom of the page and back to the top before taking
    /// the screenshot. The default is `false`.
    pub fn full_page_scroll(self, full_page_scroll: bool) -> Self {
        self.add_one("full_page_scroll", full_page_scroll.to_string())
    }

    /// Delay between scroll steps, in milliseconds. The default is 400.
    pub fn full_page_scroll_delay(self, delay: u32) -> Self {
        self.add_one("full_page_scroll_delay", delay.to_string())
    }

    /// How many pixels to scroll by per step. Defaults to the viewport
    /// height.
    pub fn full_page_scroll_by(self, scroll_by: u32) -> Self {
        self.add_one("full_page_scroll_by", scroll_by.to_string())
    }

    /// Emulate a named device instead of specifying viewport parameters
    /// manually. Sets the viewport and the user agent in one go.
    pub fn viewport_device(self, device: impl Into<String>) -> Self {
        self.add_one("viewport_device", device.into())
    }

    /// Width of the browser viewport, in pixels.
    pub fn viewport_width(self, width: u32) -> Self {
        self.add_one("viewport_width", width.to_string())
    }

    /// Height of the browser viewport, in pixels.
    pub fn viewport_height(self, height: u32) -> Self {
        self.add_one("viewport_height", height.to_string())
    }

    /// Device scale factor, between 1 and 5; real values like 2.25 are
    /// accepted.
    pub fn device_scale_factor(self, factor: f64) -> Self {
        self.add_one("device_scale_factor", factor.to_string())
    }

    /// Whether the meta viewport tag is taken into account. Defaults to
    /// `false`.
    pub fn viewport_mobile(self, mobile: bool) -> Self {
        self.add_one("viewport_mobile", mobile.to_string())
    }

    /// Whether the viewport supports touch events. Defaults to `false`.
    pub fn viewport_has_touch(self, has_touch: bool) -> Self {
        self.add_one("viewport_has_touch", has_touch.to_string())
    }

    /// Whether the viewport is in landscape mode. Overrides the value set
    /// by [`viewport_device`](Self::viewport_device).
    pub fn viewport_landscape(self, landscape: bool) -> Self {
        self.add_one("viewport_landscape", landscape.to_string())
    }

    /// Image quality, for the lossy formats (`jpeg`, `webp`).
    pub fn image_quality(self, quality: u32) -> Self {
        self.add_one("image_quality", quality.to_string())
    }

    /// Renders a thumbnail of the given width.
    pub fn image_width(self, width: u32) -> Self {
        self.add_one("image_width", width.to_string())
    }

    /// Renders a thumbnail of the given height.
    pub fn image_height(self, height: u32) -> Self {
        self.add_one("image_height", height.to_string())
    }

    /// Renders a transparent background. Works only if the site has not
    /// defined a background color, and only for `png` and `webp`.
    pub fn omit_background(self, omit_background: bool) -> Self {
        self.add_one("omit_background", omit_background.to_string())
    }

    /// Requests the site in dark mode, when the site supports it.
    pub fn dark_mode(self, dark_mode: bool) -> Self {
        self.add_one("dark_mode", dark_mode.to_string())
    }

    /// Requests the site with reduced motion, when the site supports it.
    pub fn reduced_motion(self, reduced_motion: bool) -> Self {
        self.add_one("reduced_motion", reduced_motion.to_string())
    }

    /// Renders the page with the given CSS media type.
    pub fn media_type(self, media_type: MediaType) -> Self {
        self.add_one("media_type", media_type.as_str())
    }

    /// Hides all elements matching the given selectors before taking the
    /// screenshot, by setting `display: none !important` on them.
    pub fn hide_selectors<I, S>(self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_many("hide_selectors", selectors.into_iter().map(Into::into))
    }

    /// Injects custom JavaScript into the page.
    pub fn scripts(self, scripts: impl Into<String>) -> Self {
        self.add_one("scripts", scripts.into())
    }

    /// Waits for the given events after the injected scripts were executed.
    /// The default is to not wait at all.
    pub fn scripts_wait_until<I>(self, events: I) -> Self
    where
        I: IntoIterator<Item = WaitUntil>,
    {
        self.add_many(
            "scripts_wait_until",
            events.into_iter().map(|e| e.as_str().to_string()),
        )
    }

    /// Injects custom styles into the page.
    pub fn styles(self, styles: impl Into<String>) -> Self {
        self.add_one("styles", styles.into())
    }

    /// Clicks the element matching the given selector before taking the
    /// screenshot.
    pub fn click(self, click: impl Into<String>) -> Self {
        self.add_one("click", click.into())
    }

    /// Blocks cookie banners, GDPR overlay windows, and other
    /// privacy-related notices.
    pub fn block_cookie_banners(self, block: bool) -> Self {
        self.add_one("block_cookie_banners", block.to_string())
    }

    /// Blocks chat widgets (Intercom, Crisp, Drift, and many others).
    pub fn block_chats(self, block: bool) -> Self {
        self.add_one("block_chats", block.to_string())
    }

    /// Blocks ads.
    pub fn block_ads(self, block: bool) -> Self {
        self.add_one("block_ads", block.to_string())
    }

    /// Blocks trackers.
    pub fn block_trackers(self, block: bool) -> Self {
        self.add_one("block_trackers", block.to_string())
    }

    /// Blocks requests by URL, domain, or pattern.
    pub fn block_requests<I, S>(self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_many("block_requests", patterns.into_iter().map(Into::into))
    }

    /// Blocks loading of resources by type.
    pub fn block_resources<I>(self, resources: I) -> Self
    where
        I: IntoIterator<Item = BlockResource>,
    {
        self.add_many(
            "block_resources",
            resources.into_iter().map(|r| r.as_str().to_string()),
        )
    }

    /// Geolocation latitude. Latitude and longitude are both required if
    /// either is set.
    pub fn geolocation_latitude(self, latitude: f64) -> Self {
        self.add_one("geolocation_latitude", latitude.to_string())
    }

    /// Geolocation longitude. Latitude and longitude are both required if
    /// either is set.
    pub fn geolocation_longitude(self, longitude: f64) -> Self {
        self.add_one("geolocation_longitude", longitude.to_string())
    }

    /// Geolocation accuracy, in meters.
    pub fn geolocation_accuracy(self, accuracy: u32) -> Self {
        self.add_one("geolocation_accuracy", accuracy.to_string())
    }

    /// Routes the rendering request through a custom proxy.
    pub fn proxy(self, proxy: impl Into<String>) -> Self {
        self.add_one("proxy", proxy.into())
    }

    /// User agent the browser sends when loading the page.
    pub fn user_agent(self, user_agent: impl Into<String>) -> Self {
        self.add_one("user_agent", user_agent.into())
    }

    /// Authorization header the browser sends when loading the page.
    pub fn authorization(self, authorization: impl Into<String>) -> Self {
        self.add_one("authorization", authorization.into())
    }

    /// Cookies the browser sends when loading the page.
    pub fn cookies<I, S>(self, cookies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_many("cookies", cookies.into_iter().map(Into::into))
    }

    /// Extra headers the browser sends when loading the page.
    pub fn headers<I, S>(self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_many("headers", headers.into_iter().map(Into::into))
    }

    /// Time zone the page is rendered in.
    pub fn time_zone(self, time_zone: TimeZone) -> Self {
        self.add_one("time_zone", time_zone.as_str())
    }

    /// Waits for the given events before taking the screenshot. The default
    /// is `load` and `domcontentloaded`.
    pub fn wait_until<I>(self, events: I) -> Self
    where
        I: IntoIterator<Item = WaitUntil>,
    {
        self.add_many(
            "wait_until",
            events.into_iter().map(|e| e.as_str().to_string()),
        )
    }

    /// Delay in seconds before taking the screenshot.
    pub fn delay(self, delay: u32) -> Self {
        self.add_one("delay", delay.to_string())
    }

    /// Timeout in seconds after which the request is aborted. The default
    /// and maximum is 30.
    pub fn timeout(self, timeout: u32) -> Self {
        self.add_one("timeout", timeout.to_string())
    }

    /// Waits until the element matching the selector appears in the DOM.
    pub fn wait_for_selector(self, selector: impl Into<String>) -> Self {
        self.add_one("wait_for_selector", selector.into())
    }

    /// Enables caching of the screenshot. The default is `false`.
    pub fn cache(self, cache: bool) -> Self {
        self.add_one("cache", cache.to_string())
    }

    /// How long the cached screenshot should be stored, in seconds. The
    /// minimum is 14400 (4 hours), the maximum 2592000 (one month).
    pub fn cache_ttl(self, ttl: u32) -> Self {
        self.add_one("cache_ttl", ttl.to_string())
    }

    /// Screenshots are cached by the combination of all request options;
    /// the cache key allows having different cached versions of the same
    /// screenshot.
    pub fn cache_key(self, key: impl Into<String>) -> Self {
        self.add_one("cache_key", key.into())
    }

    /// Uploads the result to the configured S3 bucket. The default is
    /// `false`.
    pub fn store(self, store: bool) -> Self {
        self.add_one("store", store.to_string())
    }

    /// Object key for the stored file. Required when storing; the extension
    /// is added automatically from the chosen format.
    pub fn storage_path(self, path: impl Into<String>) -> Self {
        self.add_one("storage_path", path.into())
    }

    /// Overrides the default storage bucket.
    pub fn storage_bucket(self, bucket: impl Into<String>) -> Self {
        self.add_one("storage_bucket", bucket.into())
    }

    /// Object storage class for the stored file. The default is `standard`.
    pub fn storage_class(self, class: StorageClass) -> Self {
        self.add_one("storage_class", class.as_str())
    }

    /// Returns an error when the element given by
    /// [`selector`](Self::selector) is not visible within the timeout.
    pub fn error_on_selector_not_found(self, error_on: bool) -> Self {
        self.add_one("error_on_selector_not_found", error_on.to_string())
    }

    /// Read-only, order-preserving view of the accumulated query
    /// parameters.
    pub fn query(&self) -> &[(String, Vec<String>)] {
        &self.query
    }

    /// The first wire parameter that was set twice, if any.
    pub(crate) fn duplicate_key(&self) -> Option<&str> {
        self.duplicate.as_deref()
    }

    fn add_one(self, key: &'static str, value: impl Into<String>) -> Self {
        self.add(key, vec![value.into()])
    }

    fn add_many(self, key: &'static str, values: impl Iterator<Item = String>) -> Self {
        self.add(key, values.collect())
    }

    fn add(mut self, key: &'static str, values: Vec<String>) -> Self {
        if self.query.iter().any(|(k, _)| k == key) {
            // Keep the first offender so the eventual error names the
            // parameter the caller set twice.
            self.duplicate.get_or_insert_with(|| key.to_string());
            return self;
        }

        self.query.push((key.to_string(), values));
        self
    }
}

/// Response format of the rendered screenshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Png,
    Jpeg,
    Webp,
    Jpg,
    Gif,
    Jp2,
    Tiff,
    Avif,
    Heif,
    Html,
    Pdf,
}

impl Format {
    /// The wire string the API expects for this format.
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Png => "png",
            Format::Jpeg => "jpeg",
            Format::Webp => "webp",
            Format::Jpg => "jpg",
            Format::Gif => "gif",
            Format::Jp2 => "jp2",
            Format::Tiff => "tiff",
            Format::Avif => "avif",
            Format::Heif => "heif",
            Format::Html => "html",
            Format::Pdf => "pdf",
        }
    }
}

/// What the API returns in the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseType {
    /// Return the rendered result in the requested format.
    ByFormat,
    /// Return only the status. Useful when uploading to storage, since no
    /// response body needs to travel back.
    Empty,
}

impl ResponseType {
    pub fn as_str(self) -> &'static str {
        match self {
            ResponseType::ByFormat => "by_format",
            ResponseType::Empty => "empty",
        }
    }
}

/// CSS media type the page is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Print,
    Screen,
}

impl MediaType {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Print => "print",
            MediaType::Screen => "screen",
        }
    }
}

/// Page lifecycle events that can be waited on before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitUntil {
    Load,
    DomContentLoaded,
    NetworkIdle0,
    NetworkIdle2,
}

impl WaitUntil {
    pub fn as_str(self) -> &'static str {
        match self {
            WaitUntil::Load => "load",
            WaitUntil::DomContentLoaded => "domcontentloaded",
            WaitUntil::NetworkIdle0 => "networkidle0",
            WaitUntil::NetworkIdle2 => "networkidle2",
        }
    }
}

/// Resource types that can be blocked from loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockResource {
    Document,
    Stylesheet,
    Image,
    Media,
    Font,
    Script,
    TextTrack,
    Xhr,
    Fetch,
    EventSource,
    Websocket,
    Manifest,
    Other,
}

impl BlockResource {
    pub fn as_str(self) -> &'static str {
        match self {
            BlockResource::Document => "document",
            BlockResource::Stylesheet => "stylesheet",
            BlockResource::Image => "image",
            BlockResource::Media => "media",
            BlockResource::Font => "font",
            BlockResource::Script => "script",
            BlockResource::TextTrack => "texttrack",
            BlockResource::Xhr => "xhr",
            BlockResource::Fetch => "fetch",
            BlockResource::EventSource => "eventsource",
            BlockResource::Websocket => "websocket",
            BlockResource::Manifest => "manifest",
            BlockResource::Other => "other",
        }
    }
}

/// Time zones supported by the rendering service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeZone {
    AmericaSantiago,
    AsiaShanghai,
    EuropeBerlin,
    AmericaGuayaquil,
    EuropeMadrid,
    PacificMajuro,
    AsiaKualaLumpur,
    PacificAuckland,
    EuropeLisbon,
    EuropeKiev,
    AsiaTashkent,
    EuropeLondon,
}

impl TimeZone {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeZone::AmericaSantiago => "America/Santiago",
            TimeZone::AsiaShanghai => "Asia/Shanghai",
            TimeZone::EuropeBerlin => "Europe/Berlin",
            TimeZone::AmericaGuayaquil => "America/Guayaquil",
            TimeZone::EuropeMadrid => "Europe/Madrid",
            TimeZone::PacificMajuro => "Pacific/Majuro",
            TimeZone::AsiaKualaLumpur => "Asia/Kuala_Lumpur",
            TimeZone::PacificAuckland => "Pacific/Auckland",
            TimeZone::EuropeLisbon => "Europe/Lisbon",
            TimeZone::EuropeKiev => "Europe/Kiev",
            TimeZone::AsiaTashkent => "Asia/Tashkent",
            TimeZone::EuropeLondon => "Europe/London",
        }
    }
}

/// S3 storage classes for stored screenshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageClass {
    Standard,
    ReducedRedundancy,
    StandardIa,
    OnezoneIa,
    IntelligentTiering,
    Glacier,
    DeepArchive,
    Outposts,
    GlacierIr,
}

impl StorageClass {
    pub fn as_str(self) -> &'static str {
        match self {
            StorageClass::Standard => "standard",
            StorageClass::ReducedRedundancy => "reduced_redundancy",
            StorageClass::StandardIa => "standard_ia",
            StorageClass::OnezoneIa => "onezone_ia",
            StorageClass::IntelligentTiering => "intelligent_tiering",
            StorageClass::Glacier => "glacier",
            StorageClass::DeepArchive => "deep_archive",
            StorageClass::Outposts => "outposts",
            StorageClass::GlacierIr => "glacier_ir",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values_for<'a>(options: &'a TakeOptions, key: &str) -> Option<&'a Vec<String>> {
        options
            .query()
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    #[test]
    fn source_factories_set_the_source_parameter() {
        let options = TakeOptions::url("https://example.com");
        assert_eq!(
            values_for(&options, "url"),
            Some(&vec!["https://example.com".to_string()])
        );

        let options = TakeOptions::html("<h1>Test</h1>");
        assert_eq!(
            values_for(&options, "html"),
            Some(&vec!["<h1>Test</h1>".to_string()])
        );

        let options = TakeOptions::markdown("# Test");
        assert_eq!(
            values_for(&options, "markdown"),
            Some(&vec!["# Test".to_string()])
        );
    }

    #[test]
    fn every_setter_round_trips_its_wire_key() {
        let options = TakeOptions::url("http://www.example.com")
            .selector("x")
            .format(Format::Gif)
            .response_type(ResponseType::ByFormat)
            .full_page(true)
            .full_page_scroll(true)
            .full_page_scroll_delay(1)
            .full_page_scroll_by(1)
            .viewport_device("x")
            .viewport_width(1200)
            .viewport_height(1200)
            .device_scale_factor(1.0)
            .viewport_mobile(true)
            .viewport_has_touch(true)
            .viewport_landscape(true)
            .image_quality(1)
            .image_width(2)
            .image_height(3)
            .omit_background(false)
            .dark_mode(false)
            .reduced_motion(true)
            .media_type(MediaType::Screen)
            .hide_selectors(["x"])
            .scripts("x")
            .scripts_wait_until([WaitUntil::Load, WaitUntil::DomContentLoaded])
            .styles("x")
            .click("x")
            .block_cookie_banners(true)
            .block_chats(true)
            .block_ads(true)
            .block_trackers(true)
            .block_requests(["x"])
            .block_resources([BlockResource::Other])
            .geolocation_latitude(1.0)
            .geolocation_longitude(2.0)
            .geolocation_accuracy(3)
            .proxy("x")
            .user_agent("x")
            .authorization("x")
            .cookies(["x"])
            .headers(["x"])
            .time_zone(TimeZone::EuropeLondon)
            .wait_until([WaitUntil::Load, WaitUntil::NetworkIdle0])
            .delay(123)
            .timeout(20)
            .wait_for_selector("x")
            .cache(true)
            .cache_ttl(1234)
            .cache_key("x")
            .store(true)
            .storage_path("x")
            .storage_bucket("x")
            .storage_class(StorageClass::Standard)
            .error_on_selector_not_found(true);

        let expected_keys = [
            "url",
            "selector",
            "format",
            "response_type",
            "full_page",
            "full_page_scroll",
            "full_page_scroll_delay",
            "full_page_scroll_by",
            "viewport_device",
            "viewport_width",
            "viewport_height",
            "device_scale_factor",
            "viewport_mobile",
            "viewport_has_touch",
            "viewport_landscape",
            "image_quality",
            "image_width",
            "image_height",
            "omit_background",
            "dark_mode",
            "reduced_motion",
            "media_type",
            "hide_selectors",
            "scripts",
            "scripts_wait_until",
            "styles",
            "click",
            "block_cookie_banners",
            "block_chats",
            "block_ads",
            "block_trackers",
            "block_requests",
            "block_resources",
            "geolocation_latitude",
            "geolocation_longitude",
            "geolocation_accuracy",
            "proxy",
            "user_agent",
            "authorization",
            "cookies",
            "headers",
            "time_zone",
            "wait_until",
            "delay",
            "timeout",
            "wait_for_selector",
            "cache",
            "cache_ttl",
            "cache_key",
            "store",
            "storage_path",
            "storage_bucket",
            "storage_class",
            "error_on_selector_not_found",
        ];

        assert!(options.duplicate_key().is_none());
        assert_eq!(options.query().len(), expected_keys.len());
        for key in expected_keys {
            assert!(
                values_for(&options, key).is_some(),
                "missing wire key {key}"
            );
        }
    }

    #[test]
    fn insertion_order_is_preserved() {
        let options = TakeOptions::url("https://example.com")
            .full_page(true)
            .format(Format::Jpg)
            .delay(2);

        let keys: Vec<&str> = options.query().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["url", "full_page", "format", "delay"]);
    }

    #[test]
    fn booleans_encode_as_true_false_literals() {
        let options = TakeOptions::url("https://example.com")
            .full_page(true)
            .dark_mode(false);

        assert_eq!(
            values_for(&options, "full_page"),
            Some(&vec!["true".to_string()])
        );
        assert_eq!(
            values_for(&options, "dark_mode"),
            Some(&vec!["false".to_string()])
        );
    }

    #[test]
    fn floats_encode_without_trailing_zeroes() {
        let options = TakeOptions::url("https://example.com")
            .device_scale_factor(2.25)
            .geolocation_latitude(1.0);

        assert_eq!(
            values_for(&options, "device_scale_factor"),
            Some(&vec!["2.25".to_string()])
        );
        assert_eq!(
            values_for(&options, "geolocation_latitude"),
            Some(&vec!["1".to_string()])
        );
    }

    #[test]
    fn multi_valued_options_keep_their_values_in_order() {
        let options = TakeOptions::url("https://example.com")
            .block_resources([BlockResource::Fetch, BlockResource::Image])
            .cookies(["a=1", "b=2"]);

        assert_eq!(
            values_for(&options, "block_resources"),
            Some(&vec!["fetch".to_string(), "image".to_string()])
        );
        assert_eq!(
            values_for(&options, "cookies"),
            Some(&vec!["a=1".to_string(), "b=2".to_string()])
        );
    }

    #[test]
    fn setting_a_parameter_twice_records_the_duplicate() {
        let options = TakeOptions::url("https://example.com")
            .format(Format::Png)
            .format(Format::Jpeg);

        assert_eq!(options.duplicate_key(), Some("format"));
        // The first value wins; the second insertion is dropped.
        assert_eq!(
            values_for(&options, "format"),
            Some(&vec!["png".to_string()])
        );
    }

    #[test]
    fn first_duplicate_is_the_one_reported() {
        let options = TakeOptions::url("https://example.com")
            .delay(1)
            .delay(2)
            .timeout(3)
            .timeout(4);

        assert_eq!(options.duplicate_key(), Some("delay"));
    }

    #[test]
    fn enum_wire_strings_match_the_api_contract() {
        assert_eq!(Format::Jpeg.as_str(), "jpeg");
        assert_eq!(Format::Jp2.as_str(), "jp2");
        assert_eq!(ResponseType::ByFormat.as_str(), "by_format");
        assert_eq!(MediaType::Print.as_str(), "print");
        assert_eq!(WaitUntil::DomContentLoaded.as_str(), "domcontentloaded");
        assert_eq!(BlockResource::TextTrack.as_str(), "texttrack");
        assert_eq!(TimeZone::AsiaKualaLumpur.as_str(), "Asia/Kuala_Lumpur");
        assert_eq!(StorageClass::GlacierIr.as_str(), "glacier_ir");
    }
}
