//! The registered HTTP status names and their numeric codes.
//!
//! The table mirrors the IANA status code registry (RFC 9110 plus the
//! WebDAV and extension RFCs). It is built once, at compile time, and
//! shared read-only by every consumer.

/// The full ordered (name, code) table.
pub type Registry = &'static [(&'static str, u16)];

macro_rules! registry {
    ($($(#[$attr:meta])* ($code:literal, $variant:ident, $name:literal);)+) => {
        /// The closed set of registered symbolic status names.
        ///
        /// Each variant's discriminant is its numeric code.
        #[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
        #[cfg_attr(feature = "schema", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "schema", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
        #[repr(u16)]
        pub enum StatusName {
            $(
                $(#[$attr])*
                $variant = $code,
            )+
        }

        /// Every registered (name, code) pair, in code order.
        pub const REGISTRY: Registry = &[$(($name, $code),)+];

        impl StatusName {
            /// Number of registered names.
            pub const COUNT: usize = REGISTRY.len();

            /// Every name, in the same order as [`REGISTRY`].
            pub const ALL: [Self; Self::COUNT] = [$(Self::$variant,)+];

            /// The canonical symbolic name.
            pub const fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            /// The numeric code.
            pub const fn code(&self) -> u16 {
                *self as u16
            }

            /// Resolves a symbolic name; unrecognized names are `None`.
            pub fn parse(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Resolves a numeric code; unregistered codes are `None`.
            pub fn from_code(code: u16) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

registry! {
    // informational 1xx
    /// 100 Continue.
    (100, Continue, "CONTINUE");
    /// 101 Switching Protocols.
    (101, SwitchingProtocols, "SWITCHING_PROTOCOLS");
    /// 102 Processing (WebDAV).
    (102, Processing, "PROCESSING");
    /// 103 Early Hints.
    (103, EarlyHints, "EARLY_HINTS");

    // success 2xx
    /// 200 OK.
    (200, Ok, "OK");
    /// 201 Created.
    (201, Created, "CREATED");
    /// 202 Accepted.
    (202, Accepted, "ACCEPTED");
    /// 203 Non-Authoritative Information.
    (203, NonAuthoritativeInformation, "NON_AUTHORITATIVE_INFORMATION");
    /// 204 No Content.
    (204, NoContent, "NO_CONTENT");
    /// 205 Reset Content.
    (205, ResetContent, "RESET_CONTENT");
    /// 206 Partial Content.
    (206, PartialContent, "PARTIAL_CONTENT");
    /// 207 Multi-Status (WebDAV).
    (207, MultiStatus, "MULTI_STATUS");
    /// 208 Already Reported (WebDAV).
    (208, AlreadyReported, "ALREADY_REPORTED");
    /// 226 IM Used.
    (226, ImUsed, "IM_USED");

    // redirection 3xx
    /// 300 Multiple Choices.
    (300, MultipleChoices, "MULTIPLE_CHOICES");
    /// 301 Moved Permanently.
    (301, MovedPermanently, "MOVED_PERMANENTLY");
    /// 302 Found.
    (302, Found, "FOUND");
    /// 303 See Other.
    (303, SeeOther, "SEE_OTHER");
    /// 304 Not Modified.
    (304, NotModified, "NOT_MODIFIED");
    /// 305 Use Proxy. Deprecated.
    (305, UseProxy, "USE_PROXY");
    /// 306 Unused. Reserved, no longer assigned.
    (306, Unused, "UNUSED");
    /// 307 Temporary Redirect.
    (307, TemporaryRedirect, "TEMPORARY_REDIRECT");
    /// 308 Permanent Redirect.
    (308, PermanentRedirect, "PERMANENT_REDIRECT");

    // client error 4xx
    /// 400 Bad Request.
    (400, BadRequest, "BAD_REQUEST");
    /// 401 Unauthorized.
    (401, Unauthorized, "UNAUTHORIZED");
    /// 402 Payment Required. Reserved for future use.
    (402, PaymentRequired, "PAYMENT_REQUIRED");
    /// 403 Forbidden.
    (403, Forbidden, "FORBIDDEN");
    /// 404 Not Found.
    (404, NotFound, "NOT_FOUND");
    /// 405 Method Not Allowed.
    (405, MethodNotAllowed, "METHOD_NOT_ALLOWED");
    /// 406 Not Acceptable.
    (406, NotAcceptable, "NOT_ACCEPTABLE");
    /// 407 Proxy Authentication Required.
    (407, ProxyAuthenticationRequired, "PROXY_AUTHENTICATION_REQUIRED");
    /// 408 Request Timeout.
    (408, RequestTimeout, "REQUEST_TIMEOUT");
    /// 409 Conflict.
    (409, Conflict, "CONFLICT");
    /// 410 Gone.
    (410, Gone, "GONE");
    /// 411 Length Required.
    (411, LengthRequired, "LENGTH_REQUIRED");
    /// 412 Precondition Failed.
    (412, PreconditionFailed, "PRECONDITION_FAILED");
    /// 413 Payload Too Large.
    (413, PayloadTooLarge, "PAYLOAD_TOO_LARGE");
    /// 414 URI Too Long.
    (414, UriTooLong, "URI_TOO_LONG");
    /// 415 Unsupported Media Type.
    (415, UnsupportedMediaType, "UNSUPPORTED_MEDIA_TYPE");
    /// 416 Range Not Satisfiable.
    (416, RangeNotSatisfiable, "RANGE_NOT_SATISFIABLE");
    /// 417 Expectation Failed.
    (417, ExpectationFailed, "EXPECTATION_FAILED");
    /// 418 I'm a Teapot (RFC 2324).
    (418, ImATeapot, "IM_A_TEAPOT");
    /// 421 Misdirected Request.
    (421, MisdirectedRequest, "MISDIRECTED_REQUEST");
    /// 422 Unprocessable Entity (WebDAV).
    (422, UnprocessableEntity, "UNPROCESSABLE_ENTITY");
    /// 423 Locked (WebDAV).
    (423, Locked, "LOCKED");
    /// 424 Failed Dependency (WebDAV).
    (424, FailedDependency, "FAILED_DEPENDENCY");
    /// 425 Too Early.
    (425, TooEarly, "TOO_EARLY");
    /// 426 Upgrade Required.
    (426, UpgradeRequired, "UPGRADE_REQUIRED");
    /// 428 Precondition Required.
    (428, PreconditionRequired, "PRECONDITION_REQUIRED");
    /// 429 Too Many Requests.
    (429, TooManyRequests, "TOO_MANY_REQUESTS");
    /// 431 Request Header Fields Too Large.
    (431, RequestHeaderFieldsTooLarge, "REQUEST_HEADER_FIELDS_TOO_LARGE");
    /// 451 Unavailable For Legal Reasons.
    (451, UnavailableForLegalReasons, "UNAVAILABLE_FOR_LEGAL_REASONS");

    // server error 5xx
    /// 500 Internal Server Error.
    (500, InternalServerError, "INTERNAL_SERVER_ERROR");
    /// 501 Not Implemented.
    (501, NotImplemented, "NOT_IMPLEMENTED");
    /// 502 Bad Gateway.
    (502, BadGateway, "BAD_GATEWAY");
    /// 503 Service Unavailable.
    (503, ServiceUnavailable, "SERVICE_UNAVAILABLE");
    /// 504 Gateway Timeout.
    (504, GatewayTimeout, "GATEWAY_TIMEOUT");
    /// 505 HTTP Version Not Supported.
    (505, HttpVersionNotSupported, "HTTP_VERSION_NOT_SUPPORTED");
    /// 506 Variant Also Negotiates.
    (506, VariantAlsoNegotiates, "VARIANT_ALSO_NEGOTIATES");
    /// 507 Insufficient Storage (WebDAV).
    (507, InsufficientStorage, "INSUFFICIENT_STORAGE");
    /// 508 Loop Detected (WebDAV).
    (508, LoopDetected, "LOOP_DETECTED");
    /// 510 Not Extended.
    (510, NotExtended, "NOT_EXTENDED");
    /// 511 Network Authentication Required.
    (511, NetworkAuthenticationRequired, "NETWORK_AUTHENTICATION_REQUIRED");
}

/// Looks up the code registered for a symbolic name.
///
/// Matching is exact and case-sensitive; unrecognized names return `None`.
pub fn lookup(name: &str) -> Option<u16> {
    StatusName::parse(name).map(|status| status.code())
}

/// True iff `name` is one of the registered symbolic names.
pub fn is_valid_name(name: &str) -> bool {
    StatusName::parse(name).is_some()
}
