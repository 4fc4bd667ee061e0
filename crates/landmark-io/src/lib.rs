//! Landmark IO - XML persistence for rule collections
//!
//! Documents keep the element and attribute names of existing rule files:
//!
//! ```xml
//! <RuleSetCollection name="Pig sperm" axis="Y" application="VIA_MEDIAN" version="2.2.0">
//!   <Orient name="REFERENCE" value="Tail socket"/>
//!   <Landmark name="Tail socket">
//!     <Ruleset ruleType="ANGLE">
//!       <Rule ruleType="IS_MINIMUM">
//!         <RuleValue>1</RuleValue>
//!       </Rule>
//!     </Ruleset>
//!   </Landmark>
//!   <Measurement>Area</Measurement>
//! </RuleSetCollection>
//! ```
//!
//! Flags are written as `1`/`0`. Decoding also accepts `true`/`false`.

mod codec;
mod document;
pub mod error;

pub use codec::{
    decode_collection, decode_rule, decode_rule_set, encode_collection, encode_rule,
    encode_rule_set, read_collection, write_collection, COLLECTION_ELEMENT, RULE_ELEMENT,
    RULE_SET_ELEMENT,
};
pub use error::CodecError;
