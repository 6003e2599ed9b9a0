//! Error-code enumerations.
//!
//! Every operation has its own enumeration with an `OK` sentinel. Response
//! headers carry a shared [`HeaderErrorCode`]. Codes are compared by value
//! only; no numeric meaning is assumed. Codes missing from an enumeration
//! decode to its `Other` variant with the wire text unchanged.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! error_code_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:tt ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            /// Success sentinel.
            #[default]
            Ok,
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// A code this crate does not name, kept verbatim.
            Other(String),
        }

        impl $name {
            /// Returns the wire name of the code.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    Self::Ok => "OK",
                    $( Self::$variant => $wire, )+
                    Self::Other(code) => code,
                }
            }

            /// Returns true if this is the success sentinel.
            #[must_use]
            pub const fn is_ok(&self) -> bool {
                matches!(self, Self::Ok)
            }
        }

        impl From<&str> for $name {
            fn from(code: &str) -> Self {
                match code {
                    "OK" => Self::Ok,
                    $( $wire => Self::$variant, )+
                    other => Self::Other(other.to_string()),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let code = String::deserialize(deserializer)?;
                Ok(Self::from(code.as_str()))
            }
        }
    };
}

error_code_enum! {
    /// Protocol-level status carried in every response header.
    HeaderErrorCode {
        /// Unexpected server-side failure.
        InternalError => "INTERNAL_ERROR",
        /// Request rate limit exceeded.
        ExceededThrottle => "EXCEEDED_THROTTLE",
        /// The account is not subscribed to the requested product.
        UserNotSubscribedToProduct => "USER_NOT_SUBSCRIBED_TO_PRODUCT",
        /// Subscription is inactive or suspended.
        SubscriptionInactiveOrSuspended => "SUBSCRIPTION_INACTIVE_OR_SUSPENDED",
        /// Vendor software is inactive.
        VendorSoftwareInactive => "VENDOR_SOFTWARE_INACTIVE",
        /// Vendor software identifier is invalid.
        VendorSoftwareInvalid => "VENDOR_SOFTWARE_INVALID",
        /// The service is not part of the subscribed product.
        ServiceNotAvailableInProduct => "SERVICE_NOT_AVAILABLE_IN_PRODUCT",
        /// Missing or expired session token.
        NoSession => "NO_SESSION",
        /// Too many concurrent requests.
        TooManyRequests => "TOO_MANY_REQUESTS",
        /// The product requires a funded account.
        ProductRequiresFundedAccount => "PRODUCT_REQUIRES_FUNDED_ACCOUNT",
        /// The service is not available for the current login status.
        ServiceNotAvailableForLoginStatus => "SERVICE_NOT_AVAILABLE_FOR_LOGIN_STATUS",
    }
}

error_code_enum! {
    /// Status of a login call.
    LoginErrorCode {
        /// Header carries the real failure.
        ApiError => "API_ERROR",
        /// The account is closed.
        AccountClosed => "ACCOUNT_CLOSED",
        /// The account is suspended.
        AccountSuspended => "ACCOUNT_SUSPENDED",
        /// Login rejected with a message for the user.
        FailedMessage => "FAILED_MESSAGE",
        /// Login from a restricted location.
        InvalidLocation => "INVALID_LOCATION",
        /// Unknown product identifier.
        InvalidProductId => "INVALID_PRODUCT",
        /// Bad credentials.
        InvalidUsernameOrPassword => "INVALID_USERNAME_OR_PASSWORD",
        /// Too many failed attempts.
        AccountLocked => "LOGIN_FAILED_ACCOUNT_LOCKED",
        /// Terms and conditions must be accepted first.
        RequireTermsAndConditions => "LOGIN_REQUIRE_TERMS_AND_CONDITIONS_ACCEPTANCE",
        /// Login is restricted for this account.
        LoginRestricted => "LOGIN_RESTRICTED",
    }
}

error_code_enum! {
    /// Status of a market listing call.
    GetAllMarketsErrorCode {
        /// Header carries the real failure.
        ApiError => "API_ERROR",
        /// Unknown country filter.
        InvalidCountryCode => "INVALID_COUNTRY_CODE",
        /// Unknown locale.
        InvalidLocale => "INVALID_LOCALE",
    }
}

error_code_enum! {
    /// Status of a single-market lookup.
    GetMarketErrorCode {
        /// Header carries the real failure.
        ApiError => "API_ERROR",
        /// No such market.
        InvalidMarket => "INVALID_MARKET",
        /// The market type cannot be returned by this call.
        MarketTypeNotSupported => "MARKET_TYPE_NOT_SUPPORTED",
    }
}

error_code_enum! {
    /// Status of an account funds query.
    GetAccountFundsErrorCode {
        /// Header carries the real failure.
        ApiError => "API_ERROR",
    }
}

error_code_enum! {
    /// Status of a bet placement call.
    PlaceBetsErrorCode {
        /// Header carries the real failure.
        ApiError => "API_ERROR",
        /// Another placement for this account is in flight.
        BetInProgress => "BET_IN_PROGRESS",
        /// Bets span more than one market.
        DifferentMarkets => "DIFFERENT_MARKETS",
        /// The event is closed.
        EventClosed => "EVENT_CLOSED",
        /// The event is suspended.
        EventSuspended => "EVENT_SUSPENDED",
        /// Not enough available funds.
        InsufficientFunds => "ACCOUNT_FUNDS_INSUFFICIENT",
        /// No such market.
        InvalidMarket => "INVALID_MARKET",
        /// Empty or oversized bet list.
        InvalidNumberOfBets => "INVALID_NUMBER_OF_BETS",
        /// The market is closed.
        MarketClosed => "MARKET_STATUS_CLOSED",
        /// The market is suspended.
        MarketSuspended => "MARKET_STATUS_SUSPENDED",
    }
}

/// Operation-level code of a failed call, tagged with its operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OperationErrorCode {
    /// Code returned by login.
    Login(LoginErrorCode),
    /// Code returned by the market listing.
    GetAllMarkets(GetAllMarketsErrorCode),
    /// Code returned by the single-market lookup.
    GetMarket(GetMarketErrorCode),
    /// Code returned by the funds query.
    GetAccountFunds(GetAccountFundsErrorCode),
    /// Code returned by bet placement.
    PlaceBets(PlaceBetsErrorCode),
}

impl fmt::Display for OperationErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login(code) => write!(f, "{}", code),
            Self::GetAllMarkets(code) => write!(f, "{}", code),
            Self::GetMarket(code) => write!(f, "{}", code),
            Self::GetAccountFunds(code) => write!(f, "{}", code),
            Self::PlaceBets(code) => write!(f, "{}", code),
        }
    }
}

impl From<LoginErrorCode> for OperationErrorCode {
    fn from(code: LoginErrorCode) -> Self {
        Self::Login(code)
    }
}

impl From<GetAllMarketsErrorCode> for OperationErrorCode {
    fn from(code: GetAllMarketsErrorCode) -> Self {
        Self::GetAllMarkets(code)
    }
}

impl From<GetMarketErrorCode> for OperationErrorCode {
    fn from(code: GetMarketErrorCode) -> Self {
        Self::GetMarket(code)
    }
}

impl From<GetAccountFundsErrorCode> for OperationErrorCode {
    fn from(code: GetAccountFundsErrorCode) -> Self {
        Self::GetAccountFunds(code)
    }
}

impl From<PlaceBetsErrorCode> for OperationErrorCode {
    fn from(code: PlaceBetsErrorCode) -> Self {
        Self::PlaceBets(code)
    }
}
