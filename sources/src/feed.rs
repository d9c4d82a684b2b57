//! Receiver feed.
//!
//! dump1090 and readsb both serve a JSON snapshot of all currently visible aircraft, usually
//! as `/data/aircraft.json` or `/run/readsb/aircraft.json`.  It is refreshed every second or so
//! on the receiver, we just GET it.
//!
//! There is no retry: a failed fetch is reported to the caller which decides what to do.
//!

use std::time::Duration;

use clap::{crate_name, crate_version};
use reqwest::blocking::Client;
use tracing::{debug, trace};

use skywatch_formats::{Snapshot, TrackedAircraft};

use crate::{enrich, http_get, FeedError, Fetchable, OwnerRegistry, Reference};

/// Default timeout for a single fetch
pub const DEF_TIMEOUT: Duration = Duration::from_secs(5);

/// Default URL, readsb on the local host
pub const DEF_URL: &str = "http://localhost/run/readsb/aircraft.json";

/// HTTP feed from a dump1090/readsb receiver.
///
#[derive(Clone, Debug)]
pub struct Feed {
    /// Full URL of the `aircraft.json` file
    pub url: String,
    /// reqwest blocking client
    pub client: Client,
}

impl Feed {
    #[tracing::instrument]
    pub fn new(url: &str, timeout: Duration) -> Result<Self, FeedError> {
        trace!("feed::new");

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FeedError::Client)?;
        Ok(Feed {
            url: url.to_owned(),
            client,
        })
    }

    /// Fetch and decode one snapshot.
    ///
    #[tracing::instrument(skip(self), fields(url = %self.url))]
    pub fn snapshot(&self) -> Result<Snapshot, FeedError> {
        trace!("Fetching data through {}…", self.url);

        let resp =
            http_get!(self, &self.url).map_err(|e| FeedError::from_transport(e, &self.url))?;
        debug!("{:?}", &resp);

        // Check status
        //
        let status = resp.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                status,
                url: self.url.clone(),
            });
        }

        let body = resp
            .text()
            .map_err(|e| FeedError::from_transport(e, &self.url))?;
        trace!("{} bytes", body.len());

        Ok(Snapshot::from_json(&body)?)
    }
}

impl Fetchable for Feed {
    fn name(&self) -> String {
        self.url.clone()
    }

    /// Fetch a snapshot and turn it into a list of displayable aircraft.
    ///
    #[tracing::instrument(skip(self, registry))]
    fn fetch(
        &self,
        registry: &OwnerRegistry,
        reference: &Reference,
    ) -> Result<Vec<TrackedAircraft>, FeedError> {
        let snap = self.snapshot()?;
        Ok(enrich(&snap, registry, reference))
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use skywatch_common::{Location, Units};
    use skywatch_formats::UNKNOWN;

    use super::*;
    use crate::fetch_or_empty;

    const PATH: &str = "/data/aircraft.json";

    fn setup_feed(server: &MockServer) -> Feed {
        Feed::new(&server.url(PATH), DEF_TIMEOUT).unwrap()
    }

    fn reference() -> Reference {
        Reference {
            home: Location::new(40.7, -74.0),
            units: Units::Miles,
            radius: 15.,
        }
    }

    fn registry() -> OwnerRegistry {
        [("A1B2C3".to_string(), "UNITED AIRLINES INC".to_string())]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_feed_fetch() {
        let server = MockServer::start();
        let body = json!({
            "now": 1727440395.3,
            "messages": 1000,
            "aircraft": [
                {"hex": "a1b2c3", "flight": "UAL123  ", "alt_baro": 12000, "gs": 250.0, "track": 90.0, "lat": 40.75, "lon": -74.0},
                {"hex": "ffffff", "lat": 42.0, "lon": -74.0},
                {"hex": "eeeeee", "alt_baro": 5000}
            ]
        });
        let m = server.mock(|when, then| {
            when.method(GET)
                .path(PATH)
                .header("user-agent", format!("{}/{}", crate_name!(), crate_version!()));
            then.status(200)
                .header("content-type", "application/json")
                .body(body.to_string());
        });

        let feed = setup_feed(&server);
        let list = feed.fetch(&registry(), &reference()).unwrap();
        m.assert();

        assert_eq!(1, list.len());
        assert_eq!("A1B2C3", list[0].hex());
        assert_eq!("UNITED AIRLINES INC", list[0].owner);
        assert_eq!("E", list[0].direction);
    }

    #[test]
    fn test_feed_bad_status() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(GET).path(PATH);
            then.status(503).body("Service Unavailable");
        });

        let feed = setup_feed(&server);
        let r = feed.snapshot();
        m.assert();
        assert!(matches!(r, Err(FeedError::Status { .. })));
    }

    #[test]
    fn test_feed_malformed() {
        let server = MockServer::start();
        let m = server.mock(|when, then| {
            when.method(GET).path(PATH);
            then.status(200).body("{\"aircraft\": [");
        });

        let feed = setup_feed(&server);
        let r = feed.snapshot();
        m.assert();
        assert!(matches!(r, Err(FeedError::Malformed(_))));
    }

    #[test]
    fn test_feed_timeout() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path(PATH);
            then.status(200)
                .body("{}")
                .delay(Duration::from_millis(500));
        });

        let feed = Feed::new(&server.url(PATH), Duration::from_millis(50)).unwrap();
        let r = feed.snapshot();
        assert!(matches!(r, Err(FeedError::Timeout(_))));
    }

    #[test]
    fn test_feed_unreachable_is_empty() {
        // Nothing listens on port 9 (discard) on a test machine
        let feed = Feed::new("http://127.0.0.1:9/aircraft.json", DEF_TIMEOUT).unwrap();
        let list = fetch_or_empty(&feed, &OwnerRegistry::default(), &reference());
        assert!(list.is_empty());
    }

    #[test]
    fn test_feed_unknown_owner() {
        let server = MockServer::start();
        let body = json!({"aircraft": [{"hex": "abcdef", "lat": 40.71, "lon": -74.01}]});
        server.mock(|when, then| {
            when.method(GET).path(PATH);
            then.status(200).body(body.to_string());
        });

        let feed = setup_feed(&server);
        let list = feed.fetch(&registry(), &reference()).unwrap();
        assert_eq!(1, list.len());
        assert_eq!(UNKNOWN, list[0].owner);
        assert_eq!(UNKNOWN, list[0].direction);
    }
}
