// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// Generated from the fontconfig fc-lang database:
// <https://gitlab.freedesktop.org/fontconfig/fontconfig/tree/main/fc-lang>

/// Number of records in the language orthography database.
pub const FC_LANG_DATA_SZ: usize = 248;

pub(crate) static FC_LANG_DATA: [LangRecord; FC_LANG_DATA_SZ] = [
    LangRecord {
        lang_code: "aa",
        c_lang_code: c"aa",
        char_set_sz: data::AA_LANG_ORTH_SZ as u32,
        char_set: &data::AA_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ab",
        c_lang_code: c"ab",
        char_set_sz: data::AB_LANG_ORTH_SZ as u32,
        char_set: &data::AB_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "af",
        c_lang_code: c"af",
        char_set_sz: data::AF_LANG_ORTH_SZ as u32,
        char_set: &data::AF_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ak",
        c_lang_code: c"ak",
        char_set_sz: data::AK_LANG_ORTH_SZ as u32,
        char_set: &data::AK_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "am",
        c_lang_code: c"am",
        char_set_sz: data::AM_LANG_ORTH_SZ as u32,
        char_set: &data::AM_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "an",
        c_lang_code: c"an",
        char_set_sz: data::AN_LANG_ORTH_SZ as u32,
        char_set: &data::AN_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "anp",
        c_lang_code: c"anp",
        char_set_sz: data::ANP_LANG_ORTH_SZ as u32,
        char_set: &data::ANP_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ar",
        c_lang_code: c"ar",
        char_set_sz: data::AR_LANG_ORTH_SZ as u32,
        char_set: &data::AR_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "as",
        c_lang_code: c"as",
        char_set_sz: data::AS_LANG_ORTH_SZ as u32,
        char_set: &data::AS_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ast",
        c_lang_code: c"ast",
        char_set_sz: data::AST_LANG_ORTH_SZ as u32,
        char_set: &data::AST_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "av",
        c_lang_code: c"av",
        char_set_sz: data::AV_LANG_ORTH_SZ as u32,
        char_set: &data::AV_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ay",
        c_lang_code: c"ay",
        char_set_sz: data::AY_LANG_ORTH_SZ as u32,
        char_set: &data::AY_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "az-az",
        c_lang_code: c"az-az",
        char_set_sz: data::AZ_AZ_LANG_ORTH_SZ as u32,
        char_set: &data::AZ_AZ_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "az-ir",
        c_lang_code: c"az-ir",
        char_set_sz: data::AZ_IR_LANG_ORTH_SZ as u32,
        char_set: &data::AZ_IR_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ba",
        c_lang_code: c"ba",
        char_set_sz: data::BA_LANG_ORTH_SZ as u32,
        char_set: &data::BA_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "be",
        c_lang_code: c"be",
        char_set_sz: data::BE_LANG_ORTH_SZ as u32,
        char_set: &data::BE_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ber-dz",
        c_lang_code: c"ber-dz",
        char_set_sz: data::BER_DZ_LANG_ORTH_SZ as u32,
        char_set: &data::BER_DZ_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ber-ma",
        c_lang_code: c"ber-ma",
        char_set_sz: data::BER_MA_LANG_ORTH_SZ as u32,
        char_set: &data::BER_MA_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "bg",
        c_lang_code: c"bg",
        char_set_sz: data::BG_LANG_ORTH_SZ as u32,
        char_set: &data::BG_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "bh",
        c_lang_code: c"bh",
        char_set_sz: data::BH_LANG_ORTH_SZ as u32,
        char_set: &data::BH_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "bhb",
        c_lang_code: c"bhb",
        char_set_sz: data::BHB_LANG_ORTH_SZ as u32,
        char_set: &data::BHB_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "bho",
        c_lang_code: c"bho",
        char_set_sz: data::BHO_LANG_ORTH_SZ as u32,
        char_set: &data::BHO_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "bi",
        c_lang_code: c"bi",
        char_set_sz: data::BI_LANG_ORTH_SZ as u32,
        char_set: &data::BI_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "bin",
        c_lang_code: c"bin",
        char_set_sz: data::BIN_LANG_ORTH_SZ as u32,
        char_set: &data::BIN_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "bm",
        c_lang_code: c"bm",
        char_set_sz: data::BM_LANG_ORTH_SZ as u32,
        char_set: &data::BM_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "bn",
        c_lang_code: c"bn",
        char_set_sz: data::BN_LANG_ORTH_SZ as u32,
        char_set: &data::BN_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "bo",
        c_lang_code: c"bo",
        char_set_sz: data::BO_LANG_ORTH_SZ as u32,
        char_set: &data::BO_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "br",
        c_lang_code: c"br",
        char_set_sz: data::BR_LANG_ORTH_SZ as u32,
        char_set: &data::BR_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "brx",
        c_lang_code: c"brx",
        char_set_sz: data::BRX_LANG_ORTH_SZ as u32,
        char_set: &data::BRX_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "bs",
        c_lang_code: c"bs",
        char_set_sz: data::BS_LANG_ORTH_SZ as u32,
        char_set: &data::BS_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "bua",
        c_lang_code: c"bua",
        char_set_sz: data::BUA_LANG_ORTH_SZ as u32,
        char_set: &data::BUA_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "byn",
        c_lang_code: c"byn",
        char_set_sz: data::BYN_LANG_ORTH_SZ as u32,
        char_set: &data::BYN_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ca",
        c_lang_code: c"ca",
        char_set_sz: data::CA_LANG_ORTH_SZ as u32,
        char_set: &data::CA_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ce",
        c_lang_code: c"ce",
        char_set_sz: data::CE_LANG_ORTH_SZ as u32,
        char_set: &data::CE_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ch",
        c_lang_code: c"ch",
        char_set_sz: data::CH_LANG_ORTH_SZ as u32,
        char_set: &data::CH_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "chm",
        c_lang_code: c"chm",
        char_set_sz: data::CHM_LANG_ORTH_SZ as u32,
        char_set: &data::CHM_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "chr",
        c_lang_code: c"chr",
        char_set_sz: data::CHR_LANG_ORTH_SZ as u32,
        char_set: &data::CHR_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "co",
        c_lang_code: c"co",
        char_set_sz: data::CO_LANG_ORTH_SZ as u32,
        char_set: &data::CO_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "crh",
        c_lang_code: c"crh",
        char_set_sz: data::CRH_LANG_ORTH_SZ as u32,
        char_set: &data::CRH_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "cs",
        c_lang_code: c"cs",
        char_set_sz: data::CS_LANG_ORTH_SZ as u32,
        char_set: &data::CS_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "csb",
        c_lang_code: c"csb",
        char_set_sz: data::CSB_LANG_ORTH_SZ as u32,
        char_set: &data::CSB_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "cu",
        c_lang_code: c"cu",
        char_set_sz: data::CU_LANG_ORTH_SZ as u32,
        char_set: &data::CU_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "cv",
        c_lang_code: c"cv",
        char_set_sz: data::CV_LANG_ORTH_SZ as u32,
        char_set: &data::CV_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "cy",
        c_lang_code: c"cy",
        char_set_sz: data::CY_LANG_ORTH_SZ as u32,
        char_set: &data::CY_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "da",
        c_lang_code: c"da",
        char_set_sz: data::DA_LANG_ORTH_SZ as u32,
        char_set: &data::DA_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "de",
        c_lang_code: c"de",
        char_set_sz: data::DE_LANG_ORTH_SZ as u32,
        char_set: &data::DE_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "doi",
        c_lang_code: c"doi",
        char_set_sz: data::DOI_LANG_ORTH_SZ as u32,
        char_set: &data::DOI_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "dv",
        c_lang_code: c"dv",
        char_set_sz: data::DV_LANG_ORTH_SZ as u32,
        char_set: &data::DV_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "dz",
        c_lang_code: c"dz",
        char_set_sz: data::DZ_LANG_ORTH_SZ as u32,
        char_set: &data::DZ_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ee",
        c_lang_code: c"ee",
        char_set_sz: data::EE_LANG_ORTH_SZ as u32,
        char_set: &data::EE_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "el",
        c_lang_code: c"el",
        char_set_sz: data::EL_LANG_ORTH_SZ as u32,
        char_set: &data::EL_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "en",
        c_lang_code: c"en",
        char_set_sz: data::EN_LANG_ORTH_SZ as u32,
        char_set: &data::EN_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "eo",
        c_lang_code: c"eo",
        char_set_sz: data::EO_LANG_ORTH_SZ as u32,
        char_set: &data::EO_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "es",
        c_lang_code: c"es",
        char_set_sz: data::ES_LANG_ORTH_SZ as u32,
        char_set: &data::ES_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "et",
        c_lang_code: c"et",
        char_set_sz: data::ET_LANG_ORTH_SZ as u32,
        char_set: &data::ET_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "eu",
        c_lang_code: c"eu",
        char_set_sz: data::EU_LANG_ORTH_SZ as u32,
        char_set: &data::EU_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "fa",
        c_lang_code: c"fa",
        char_set_sz: data::FA_LANG_ORTH_SZ as u32,
        char_set: &data::FA_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "fat",
        c_lang_code: c"fat",
        char_set_sz: data::FAT_LANG_ORTH_SZ as u32,
        char_set: &data::FAT_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ff",
        c_lang_code: c"ff",
        char_set_sz: data::FF_LANG_ORTH_SZ as u32,
        char_set: &data::FF_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "fi",
        c_lang_code: c"fi",
        char_set_sz: data::FI_LANG_ORTH_SZ as u32,
        char_set: &data::FI_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "fil",
        c_lang_code: c"fil",
        char_set_sz: data::FIL_LANG_ORTH_SZ as u32,
        char_set: &data::FIL_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "fj",
        c_lang_code: c"fj",
        char_set_sz: data::FJ_LANG_ORTH_SZ as u32,
        char_set: &data::FJ_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "fo",
        c_lang_code: c"fo",
        char_set_sz: data::FO_LANG_ORTH_SZ as u32,
        char_set: &data::FO_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "fr",
        c_lang_code: c"fr",
        char_set_sz: data::FR_LANG_ORTH_SZ as u32,
        char_set: &data::FR_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "fur",
        c_lang_code: c"fur",
        char_set_sz: data::FUR_LANG_ORTH_SZ as u32,
        char_set: &data::FUR_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "fy",
        c_lang_code: c"fy",
        char_set_sz: data::FY_LANG_ORTH_SZ as u32,
        char_set: &data::FY_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ga",
        c_lang_code: c"ga",
        char_set_sz: data::GA_LANG_ORTH_SZ as u32,
        char_set: &data::GA_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "gd",
        c_lang_code: c"gd",
        char_set_sz: data::GD_LANG_ORTH_SZ as u32,
        char_set: &data::GD_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "gez",
        c_lang_code: c"gez",
        char_set_sz: data::GEZ_LANG_ORTH_SZ as u32,
        char_set: &data::GEZ_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "gl",
        c_lang_code: c"gl",
        char_set_sz: data::GL_LANG_ORTH_SZ as u32,
        char_set: &data::GL_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "gn",
        c_lang_code: c"gn",
        char_set_sz: data::GN_LANG_ORTH_SZ as u32,
        char_set: &data::GN_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "gu",
        c_lang_code: c"gu",
        char_set_sz: data::GU_LANG_ORTH_SZ as u32,
        char_set: &data::GU_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "gv",
        c_lang_code: c"gv",
        char_set_sz: data::GV_LANG_ORTH_SZ as u32,
        char_set: &data::GV_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ha",
        c_lang_code: c"ha",
        char_set_sz: data::HA_LANG_ORTH_SZ as u32,
        char_set: &data::HA_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "haw",
        c_lang_code: c"haw",
        char_set_sz: data::HAW_LANG_ORTH_SZ as u32,
        char_set: &data::HAW_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "he",
        c_lang_code: c"he",
        char_set_sz: data::HE_LANG_ORTH_SZ as u32,
        char_set: &data::HE_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "hi",
        c_lang_code: c"hi",
        char_set_sz: data::HI_LANG_ORTH_SZ as u32,
        char_set: &data::HI_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "hif",
        c_lang_code: c"hif",
        char_set_sz: data::HIF_LANG_ORTH_SZ as u32,
        char_set: &data::HIF_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "hne",
        c_lang_code: c"hne",
        char_set_sz: data::HNE_LANG_ORTH_SZ as u32,
        char_set: &data::HNE_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ho",
        c_lang_code: c"ho",
        char_set_sz: data::HO_LANG_ORTH_SZ as u32,
        char_set: &data::HO_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "hr",
        c_lang_code: c"hr",
        char_set_sz: data::HR_LANG_ORTH_SZ as u32,
        char_set: &data::HR_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "hsb",
        c_lang_code: c"hsb",
        char_set_sz: data::HSB_LANG_ORTH_SZ as u32,
        char_set: &data::HSB_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ht",
        c_lang_code: c"ht",
        char_set_sz: data::HT_LANG_ORTH_SZ as u32,
        char_set: &data::HT_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "hu",
        c_lang_code: c"hu",
        char_set_sz: data::HU_LANG_ORTH_SZ as u32,
        char_set: &data::HU_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "hy",
        c_lang_code: c"hy",
        char_set_sz: data::HY_LANG_ORTH_SZ as u32,
        char_set: &data::HY_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "hz",
        c_lang_code: c"hz",
        char_set_sz: data::HZ_LANG_ORTH_SZ as u32,
        char_set: &data::HZ_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ia",
        c_lang_code: c"ia",
        char_set_sz: data::IA_LANG_ORTH_SZ as u32,
        char_set: &data::IA_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "id",
        c_lang_code: c"id",
        char_set_sz: data::ID_LANG_ORTH_SZ as u32,
        char_set: &data::ID_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ie",
        c_lang_code: c"ie",
        char_set_sz: data::IE_LANG_ORTH_SZ as u32,
        char_set: &data::IE_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ig",
        c_lang_code: c"ig",
        char_set_sz: data::IG_LANG_ORTH_SZ as u32,
        char_set: &data::IG_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ii",
        c_lang_code: c"ii",
        char_set_sz: data::II_LANG_ORTH_SZ as u32,
        char_set: &data::II_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ik",
        c_lang_code: c"ik",
        char_set_sz: data::IK_LANG_ORTH_SZ as u32,
        char_set: &data::IK_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "io",
        c_lang_code: c"io",
        char_set_sz: data::IO_LANG_ORTH_SZ as u32,
        char_set: &data::IO_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "is",
        c_lang_code: c"is",
        char_set_sz: data::IS_LANG_ORTH_SZ as u32,
        char_set: &data::IS_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "it",
        c_lang_code: c"it",
        char_set_sz: data::IT_LANG_ORTH_SZ as u32,
        char_set: &data::IT_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "iu",
        c_lang_code: c"iu",
        char_set_sz: data::IU_LANG_ORTH_SZ as u32,
        char_set: &data::IU_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ja",
        c_lang_code: c"ja",
        char_set_sz: data::JA_LANG_ORTH_SZ as u32,
        char_set: &data::JA_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "jv",
        c_lang_code: c"jv",
        char_set_sz: data::JV_LANG_ORTH_SZ as u32,
        char_set: &data::JV_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ka",
        c_lang_code: c"ka",
        char_set_sz: data::KA_LANG_ORTH_SZ as u32,
        char_set: &data::KA_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "kaa",
        c_lang_code: c"kaa",
        char_set_sz: data::KAA_LANG_ORTH_SZ as u32,
        char_set: &data::KAA_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "kab",
        c_lang_code: c"kab",
        char_set_sz: data::KAB_LANG_ORTH_SZ as u32,
        char_set: &data::KAB_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ki",
        c_lang_code: c"ki",
        char_set_sz: data::KI_LANG_ORTH_SZ as u32,
        char_set: &data::KI_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "kj",
        c_lang_code: c"kj",
        char_set_sz: data::KJ_LANG_ORTH_SZ as u32,
        char_set: &data::KJ_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "kk",
        c_lang_code: c"kk",
        char_set_sz: data::KK_LANG_ORTH_SZ as u32,
        char_set: &data::KK_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "kl",
        c_lang_code: c"kl",
        char_set_sz: data::KL_LANG_ORTH_SZ as u32,
        char_set: &data::KL_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "km",
        c_lang_code: c"km",
        char_set_sz: data::KM_LANG_ORTH_SZ as u32,
        char_set: &data::KM_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "kn",
        c_lang_code: c"kn",
        char_set_sz: data::KN_LANG_ORTH_SZ as u32,
        char_set: &data::KN_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ko",
        c_lang_code: c"ko",
        char_set_sz: data::KO_LANG_ORTH_SZ as u32,
        char_set: &data::KO_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "kok",
        c_lang_code: c"kok",
        char_set_sz: data::KOK_LANG_ORTH_SZ as u32,
        char_set: &data::KOK_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "kr",
        c_lang_code: c"kr",
        char_set_sz: data::KR_LANG_ORTH_SZ as u32,
        char_set: &data::KR_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ks",
        c_lang_code: c"ks",
        char_set_sz: data::KS_LANG_ORTH_SZ as u32,
        char_set: &data::KS_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ku-am",
        c_lang_code: c"ku-am",
        char_set_sz: data::KU_AM_LANG_ORTH_SZ as u32,
        char_set: &data::KU_AM_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ku-iq",
        c_lang_code: c"ku-iq",
        char_set_sz: data::KU_IQ_LANG_ORTH_SZ as u32,
        char_set: &data::KU_IQ_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ku-ir",
        c_lang_code: c"ku-ir",
        char_set_sz: data::KU_IR_LANG_ORTH_SZ as u32,
        char_set: &data::KU_IR_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ku-tr",
        c_lang_code: c"ku-tr",
        char_set_sz: data::KU_TR_LANG_ORTH_SZ as u32,
        char_set: &data::KU_TR_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "kum",
        c_lang_code: c"kum",
        char_set_sz: data::KUM_LANG_ORTH_SZ as u32,
        char_set: &data::KUM_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "kv",
        c_lang_code: c"kv",
        char_set_sz: data::KV_LANG_ORTH_SZ as u32,
        char_set: &data::KV_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "kw",
        c_lang_code: c"kw",
        char_set_sz: data::KW_LANG_ORTH_SZ as u32,
        char_set: &data::KW_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "kwm",
        c_lang_code: c"kwm",
        char_set_sz: data::KWM_LANG_ORTH_SZ as u32,
        char_set: &data::KWM_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ky",
        c_lang_code: c"ky",
        char_set_sz: data::KY_LANG_ORTH_SZ as u32,
        char_set: &data::KY_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "la",
        c_lang_code: c"la",
        char_set_sz: data::LA_LANG_ORTH_SZ as u32,
        char_set: &data::LA_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "lah",
        c_lang_code: c"lah",
        char_set_sz: data::LAH_LANG_ORTH_SZ as u32,
        char_set: &data::LAH_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "lb",
        c_lang_code: c"lb",
        char_set_sz: data::LB_LANG_ORTH_SZ as u32,
        char_set: &data::LB_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "lez",
        c_lang_code: c"lez",
        char_set_sz: data::LEZ_LANG_ORTH_SZ as u32,
        char_set: &data::LEZ_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "lg",
        c_lang_code: c"lg",
        char_set_sz: data::LG_LANG_ORTH_SZ as u32,
        char_set: &data::LG_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "li",
        c_lang_code: c"li",
        char_set_sz: data::LI_LANG_ORTH_SZ as u32,
        char_set: &data::LI_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ln",
        c_lang_code: c"ln",
        char_set_sz: data::LN_LANG_ORTH_SZ as u32,
        char_set: &data::LN_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "lo",
        c_lang_code: c"lo",
        char_set_sz: data::LO_LANG_ORTH_SZ as u32,
        char_set: &data::LO_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "lt",
        c_lang_code: c"lt",
        char_set_sz: data::LT_LANG_ORTH_SZ as u32,
        char_set: &data::LT_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "lv",
        c_lang_code: c"lv",
        char_set_sz: data::LV_LANG_ORTH_SZ as u32,
        char_set: &data::LV_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "mag",
        c_lang_code: c"mag",
        char_set_sz: data::MAG_LANG_ORTH_SZ as u32,
        char_set: &data::MAG_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "mai",
        c_lang_code: c"mai",
        char_set_sz: data::MAI_LANG_ORTH_SZ as u32,
        char_set: &data::MAI_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "mg",
        c_lang_code: c"mg",
        char_set_sz: data::MG_LANG_ORTH_SZ as u32,
        char_set: &data::MG_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "mh",
        c_lang_code: c"mh",
        char_set_sz: data::MH_LANG_ORTH_SZ as u32,
        char_set: &data::MH_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "mi",
        c_lang_code: c"mi",
        char_set_sz: data::MI_LANG_ORTH_SZ as u32,
        char_set: &data::MI_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "mk",
        c_lang_code: c"mk",
        char_set_sz: data::MK_LANG_ORTH_SZ as u32,
        char_set: &data::MK_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ml",
        c_lang_code: c"ml",
        char_set_sz: data::ML_LANG_ORTH_SZ as u32,
        char_set: &data::ML_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "mn-cn",
        c_lang_code: c"mn-cn",
        char_set_sz: data::MN_CN_LANG_ORTH_SZ as u32,
        char_set: &data::MN_CN_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "mn-mn",
        c_lang_code: c"mn-mn",
        char_set_sz: data::MN_MN_LANG_ORTH_SZ as u32,
        char_set: &data::MN_MN_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "mni",
        c_lang_code: c"mni",
        char_set_sz: data::MNI_LANG_ORTH_SZ as u32,
        char_set: &data::MNI_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "mo",
        c_lang_code: c"mo",
        char_set_sz: data::MO_LANG_ORTH_SZ as u32,
        char_set: &data::MO_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "mr",
        c_lang_code: c"mr",
        char_set_sz: data::MR_LANG_ORTH_SZ as u32,
        char_set: &data::MR_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ms",
        c_lang_code: c"ms",
        char_set_sz: data::MS_LANG_ORTH_SZ as u32,
        char_set: &data::MS_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "mt",
        c_lang_code: c"mt",
        char_set_sz: data::MT_LANG_ORTH_SZ as u32,
        char_set: &data::MT_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "my",
        c_lang_code: c"my",
        char_set_sz: data::MY_LANG_ORTH_SZ as u32,
        char_set: &data::MY_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "na",
        c_lang_code: c"na",
        char_set_sz: data::NA_LANG_ORTH_SZ as u32,
        char_set: &data::NA_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "nb",
        c_lang_code: c"nb",
        char_set_sz: data::NB_LANG_ORTH_SZ as u32,
        char_set: &data::NB_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "nds",
        c_lang_code: c"nds",
        char_set_sz: data::NDS_LANG_ORTH_SZ as u32,
        char_set: &data::NDS_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ne",
        c_lang_code: c"ne",
        char_set_sz: data::NE_LANG_ORTH_SZ as u32,
        char_set: &data::NE_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ng",
        c_lang_code: c"ng",
        char_set_sz: data::NG_LANG_ORTH_SZ as u32,
        char_set: &data::NG_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "nl",
        c_lang_code: c"nl",
        char_set_sz: data::NL_LANG_ORTH_SZ as u32,
        char_set: &data::NL_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "nn",
        c_lang_code: c"nn",
        char_set_sz: data::NN_LANG_ORTH_SZ as u32,
        char_set: &data::NN_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "no",
        c_lang_code: c"no",
        char_set_sz: data::NO_LANG_ORTH_SZ as u32,
        char_set: &data::NO_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "nqo",
        c_lang_code: c"nqo",
        char_set_sz: data::NQO_LANG_ORTH_SZ as u32,
        char_set: &data::NQO_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "nr",
        c_lang_code: c"nr",
        char_set_sz: data::NR_LANG_ORTH_SZ as u32,
        char_set: &data::NR_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "nso",
        c_lang_code: c"nso",
        char_set_sz: data::NSO_LANG_ORTH_SZ as u32,
        char_set: &data::NSO_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "nv",
        c_lang_code: c"nv",
        char_set_sz: data::NV_LANG_ORTH_SZ as u32,
        char_set: &data::NV_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ny",
        c_lang_code: c"ny",
        char_set_sz: data::NY_LANG_ORTH_SZ as u32,
        char_set: &data::NY_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "oc",
        c_lang_code: c"oc",
        char_set_sz: data::OC_LANG_ORTH_SZ as u32,
        char_set: &data::OC_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "om",
        c_lang_code: c"om",
        char_set_sz: data::OM_LANG_ORTH_SZ as u32,
        char_set: &data::OM_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "or",
        c_lang_code: c"or",
        char_set_sz: data::OR_LANG_ORTH_SZ as u32,
        char_set: &data::OR_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "os",
        c_lang_code: c"os",
        char_set_sz: data::OS_LANG_ORTH_SZ as u32,
        char_set: &data::OS_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ota",
        c_lang_code: c"ota",
        char_set_sz: data::OTA_LANG_ORTH_SZ as u32,
        char_set: &data::OTA_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "pa",
        c_lang_code: c"pa",
        char_set_sz: data::PA_LANG_ORTH_SZ as u32,
        char_set: &data::PA_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "pa-pk",
        c_lang_code: c"pa-pk",
        char_set_sz: data::PA_PK_LANG_ORTH_SZ as u32,
        char_set: &data::PA_PK_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "pap-an",
        c_lang_code: c"pap-an",
        char_set_sz: data::PAP_AN_LANG_ORTH_SZ as u32,
        char_set: &data::PAP_AN_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "pap-aw",
        c_lang_code: c"pap-aw",
        char_set_sz: data::PAP_AW_LANG_ORTH_SZ as u32,
        char_set: &data::PAP_AW_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "pl",
        c_lang_code: c"pl",
        char_set_sz: data::PL_LANG_ORTH_SZ as u32,
        char_set: &data::PL_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "pt",
        c_lang_code: c"pt",
        char_set_sz: data::PT_LANG_ORTH_SZ as u32,
        char_set: &data::PT_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "qu",
        c_lang_code: c"qu",
        char_set_sz: data::QU_LANG_ORTH_SZ as u32,
        char_set: &data::QU_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "quz",
        c_lang_code: c"quz",
        char_set_sz: data::QUZ_LANG_ORTH_SZ as u32,
        char_set: &data::QUZ_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "rm",
        c_lang_code: c"rm",
        char_set_sz: data::RM_LANG_ORTH_SZ as u32,
        char_set: &data::RM_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "rn",
        c_lang_code: c"rn",
        char_set_sz: data::RN_LANG_ORTH_SZ as u32,
        char_set: &data::RN_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ro",
        c_lang_code: c"ro",
        char_set_sz: data::RO_LANG_ORTH_SZ as u32,
        char_set: &data::RO_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ru",
        c_lang_code: c"ru",
        char_set_sz: data::RU_LANG_ORTH_SZ as u32,
        char_set: &data::RU_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "rw",
        c_lang_code: c"rw",
        char_set_sz: data::RW_LANG_ORTH_SZ as u32,
        char_set: &data::RW_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "sa",
        c_lang_code: c"sa",
        char_set_sz: data::SA_LANG_ORTH_SZ as u32,
        char_set: &data::SA_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "sah",
        c_lang_code: c"sah",
        char_set_sz: data::SAH_LANG_ORTH_SZ as u32,
        char_set: &data::SAH_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "sat",
        c_lang_code: c"sat",
        char_set_sz: data::SAT_LANG_ORTH_SZ as u32,
        char_set: &data::SAT_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "sc",
        c_lang_code: c"sc",
        char_set_sz: data::SC_LANG_ORTH_SZ as u32,
        char_set: &data::SC_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "sco",
        c_lang_code: c"sco",
        char_set_sz: data::SCO_LANG_ORTH_SZ as u32,
        char_set: &data::SCO_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "sd",
        c_lang_code: c"sd",
        char_set_sz: data::SD_LANG_ORTH_SZ as u32,
        char_set: &data::SD_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "se",
        c_lang_code: c"se",
        char_set_sz: data::SE_LANG_ORTH_SZ as u32,
        char_set: &data::SE_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "sel",
        c_lang_code: c"sel",
        char_set_sz: data::SEL_LANG_ORTH_SZ as u32,
        char_set: &data::SEL_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "sg",
        c_lang_code: c"sg",
        char_set_sz: data::SG_LANG_ORTH_SZ as u32,
        char_set: &data::SG_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "sh",
        c_lang_code: c"sh",
        char_set_sz: data::SH_LANG_ORTH_SZ as u32,
        char_set: &data::SH_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "shs",
        c_lang_code: c"shs",
        char_set_sz: data::SHS_LANG_ORTH_SZ as u32,
        char_set: &data::SHS_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "si",
        c_lang_code: c"si",
        char_set_sz: data::SI_LANG_ORTH_SZ as u32,
        char_set: &data::SI_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "sid",
        c_lang_code: c"sid",
        char_set_sz: data::SID_LANG_ORTH_SZ as u32,
        char_set: &data::SID_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "sk",
        c_lang_code: c"sk",
        char_set_sz: data::SK_LANG_ORTH_SZ as u32,
        char_set: &data::SK_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "sl",
        c_lang_code: c"sl",
        char_set_sz: data::SL_LANG_ORTH_SZ as u32,
        char_set: &data::SL_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "sm",
        c_lang_code: c"sm",
        char_set_sz: data::SM_LANG_ORTH_SZ as u32,
        char_set: &data::SM_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "sma",
        c_lang_code: c"sma",
        char_set_sz: data::SMA_LANG_ORTH_SZ as u32,
        char_set: &data::SMA_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "smj",
        c_lang_code: c"smj",
        char_set_sz: data::SMJ_LANG_ORTH_SZ as u32,
        char_set: &data::SMJ_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "smn",
        c_lang_code: c"smn",
        char_set_sz: data::SMN_LANG_ORTH_SZ as u32,
        char_set: &data::SMN_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "sms",
        c_lang_code: c"sms",
        char_set_sz: data::SMS_LANG_ORTH_SZ as u32,
        char_set: &data::SMS_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "sn",
        c_lang_code: c"sn",
        char_set_sz: data::SN_LANG_ORTH_SZ as u32,
        char_set: &data::SN_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "so",
        c_lang_code: c"so",
        char_set_sz: data::SO_LANG_ORTH_SZ as u32,
        char_set: &data::SO_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "sq",
        c_lang_code: c"sq",
        char_set_sz: data::SQ_LANG_ORTH_SZ as u32,
        char_set: &data::SQ_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "sr",
        c_lang_code: c"sr",
        char_set_sz: data::SR_LANG_ORTH_SZ as u32,
        char_set: &data::SR_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ss",
        c_lang_code: c"ss",
        char_set_sz: data::SS_LANG_ORTH_SZ as u32,
        char_set: &data::SS_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "st",
        c_lang_code: c"st",
        char_set_sz: data::ST_LANG_ORTH_SZ as u32,
        char_set: &data::ST_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "su",
        c_lang_code: c"su",
        char_set_sz: data::SU_LANG_ORTH_SZ as u32,
        char_set: &data::SU_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "sv",
        c_lang_code: c"sv",
        char_set_sz: data::SV_LANG_ORTH_SZ as u32,
        char_set: &data::SV_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "sw",
        c_lang_code: c"sw",
        char_set_sz: data::SW_LANG_ORTH_SZ as u32,
        char_set: &data::SW_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "syr",
        c_lang_code: c"syr",
        char_set_sz: data::SYR_LANG_ORTH_SZ as u32,
        char_set: &data::SYR_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ta",
        c_lang_code: c"ta",
        char_set_sz: data::TA_LANG_ORTH_SZ as u32,
        char_set: &data::TA_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "te",
        c_lang_code: c"te",
        char_set_sz: data::TE_LANG_ORTH_SZ as u32,
        char_set: &data::TE_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "tg",
        c_lang_code: c"tg",
        char_set_sz: data::TG_LANG_ORTH_SZ as u32,
        char_set: &data::TG_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "th",
        c_lang_code: c"th",
        char_set_sz: data::TH_LANG_ORTH_SZ as u32,
        char_set: &data::TH_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ti-er",
        c_lang_code: c"ti-er",
        char_set_sz: data::TI_ER_LANG_ORTH_SZ as u32,
        char_set: &data::TI_ER_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ti-et",
        c_lang_code: c"ti-et",
        char_set_sz: data::TI_ET_LANG_ORTH_SZ as u32,
        char_set: &data::TI_ET_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "tig",
        c_lang_code: c"tig",
        char_set_sz: data::TIG_LANG_ORTH_SZ as u32,
        char_set: &data::TIG_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "tk",
        c_lang_code: c"tk",
        char_set_sz: data::TK_LANG_ORTH_SZ as u32,
        char_set: &data::TK_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "tl",
        c_lang_code: c"tl",
        char_set_sz: data::TL_LANG_ORTH_SZ as u32,
        char_set: &data::TL_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "tn",
        c_lang_code: c"tn",
        char_set_sz: data::TN_LANG_ORTH_SZ as u32,
        char_set: &data::TN_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "to",
        c_lang_code: c"to",
        char_set_sz: data::TO_LANG_ORTH_SZ as u32,
        char_set: &data::TO_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "tr",
        c_lang_code: c"tr",
        char_set_sz: data::TR_LANG_ORTH_SZ as u32,
        char_set: &data::TR_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ts",
        c_lang_code: c"ts",
        char_set_sz: data::TS_LANG_ORTH_SZ as u32,
        char_set: &data::TS_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "tt",
        c_lang_code: c"tt",
        char_set_sz: data::TT_LANG_ORTH_SZ as u32,
        char_set: &data::TT_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "tw",
        c_lang_code: c"tw",
        char_set_sz: data::TW_LANG_ORTH_SZ as u32,
        char_set: &data::TW_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ty",
        c_lang_code: c"ty",
        char_set_sz: data::TY_LANG_ORTH_SZ as u32,
        char_set: &data::TY_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "tyv",
        c_lang_code: c"tyv",
        char_set_sz: data::TYV_LANG_ORTH_SZ as u32,
        char_set: &data::TYV_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ug",
        c_lang_code: c"ug",
        char_set_sz: data::UG_LANG_ORTH_SZ as u32,
        char_set: &data::UG_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "uk",
        c_lang_code: c"uk",
        char_set_sz: data::UK_LANG_ORTH_SZ as u32,
        char_set: &data::UK_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "und-zmth",
        c_lang_code: c"und-zmth",
        char_set_sz: data::UND_ZMTH_LANG_ORTH_SZ as u32,
        char_set: &data::UND_ZMTH_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "und-zsye",
        c_lang_code: c"und-zsye",
        char_set_sz: data::UND_ZSYE_LANG_ORTH_SZ as u32,
        char_set: &data::UND_ZSYE_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ur",
        c_lang_code: c"ur",
        char_set_sz: data::UR_LANG_ORTH_SZ as u32,
        char_set: &data::UR_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "uz",
        c_lang_code: c"uz",
        char_set_sz: data::UZ_LANG_ORTH_SZ as u32,
        char_set: &data::UZ_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "ve",
        c_lang_code: c"ve",
        char_set_sz: data::VE_LANG_ORTH_SZ as u32,
        char_set: &data::VE_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "vi",
        c_lang_code: c"vi",
        char_set_sz: data::VI_LANG_ORTH_SZ as u32,
        char_set: &data::VI_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "vo",
        c_lang_code: c"vo",
        char_set_sz: data::VO_LANG_ORTH_SZ as u32,
        char_set: &data::VO_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "vot",
        c_lang_code: c"vot",
        char_set_sz: data::VOT_LANG_ORTH_SZ as u32,
        char_set: &data::VOT_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "wa",
        c_lang_code: c"wa",
        char_set_sz: data::WA_LANG_ORTH_SZ as u32,
        char_set: &data::WA_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "wal",
        c_lang_code: c"wal",
        char_set_sz: data::WAL_LANG_ORTH_SZ as u32,
        char_set: &data::WAL_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "wen",
        c_lang_code: c"wen",
        char_set_sz: data::WEN_LANG_ORTH_SZ as u32,
        char_set: &data::WEN_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "wo",
        c_lang_code: c"wo",
        char_set_sz: data::WO_LANG_ORTH_SZ as u32,
        char_set: &data::WO_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "xh",
        c_lang_code: c"xh",
        char_set_sz: data::XH_LANG_ORTH_SZ as u32,
        char_set: &data::XH_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "yap",
        c_lang_code: c"yap",
        char_set_sz: data::YAP_LANG_ORTH_SZ as u32,
        char_set: &data::YAP_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "yi",
        c_lang_code: c"yi",
        char_set_sz: data::YI_LANG_ORTH_SZ as u32,
        char_set: &data::YI_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "yo",
        c_lang_code: c"yo",
        char_set_sz: data::YO_LANG_ORTH_SZ as u32,
        char_set: &data::YO_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "za",
        c_lang_code: c"za",
        char_set_sz: data::ZA_LANG_ORTH_SZ as u32,
        char_set: &data::ZA_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "zh-cn",
        c_lang_code: c"zh-cn",
        char_set_sz: data::ZH_CN_LANG_ORTH_SZ as u32,
        char_set: &data::ZH_CN_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "zh-hk",
        c_lang_code: c"zh-hk",
        char_set_sz: data::ZH_HK_LANG_ORTH_SZ as u32,
        char_set: &data::ZH_HK_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "zh-mo",
        c_lang_code: c"zh-mo",
        char_set_sz: data::ZH_MO_LANG_ORTH_SZ as u32,
        char_set: &data::ZH_MO_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "zh-sg",
        c_lang_code: c"zh-sg",
        char_set_sz: data::ZH_SG_LANG_ORTH_SZ as u32,
        char_set: &data::ZH_SG_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "zh-tw",
        c_lang_code: c"zh-tw",
        char_set_sz: data::ZH_TW_LANG_ORTH_SZ as u32,
        char_set: &data::ZH_TW_LANG_ORTH_CHARS,
    },
    LangRecord {
        lang_code: "zu",
        c_lang_code: c"zu",
        char_set_sz: data::ZU_LANG_ORTH_SZ as u32,
        char_set: &data::ZU_LANG_ORTH_CHARS,
    },
];
