//! Raw orthography tables, one per language.
//!
//! Each table is stored in the flat format produced by the fc-lang
//! converter: bare values are single code points, and the value
//! [`RANGE_SENTINEL`](crate::RANGE_SENTINEL) introduces an inclusive
//! `(lower, upper)` pair. `<CODE>_LANG_ORTH_SZ` is the number of slots in the
//! table, not the number of code points it describes.
//!
//! Prefer [`LangRecord::orthography`](crate::LangRecord::orthography) for
//! structured access.

include!("../generated/generated_aa_orth.rs");
include!("../generated/generated_ab_orth.rs");
include!("../generated/generated_af_orth.rs");
include!("../generated/generated_ak_orth.rs");
include!("../generated/generated_am_orth.rs");
include!("../generated/generated_an_orth.rs");
include!("../generated/generated_anp_orth.rs");
include!("../generated/generated_ar_orth.rs");
include!("../generated/generated_as_orth.rs");
include!("../generated/generated_ast_orth.rs");
include!("../generated/generated_av_orth.rs");
include!("../generated/generated_ay_orth.rs");
include!("../generated/generated_az_az_orth.rs");
include!("../generated/generated_az_ir_orth.rs");
include!("../generated/generated_ba_orth.rs");
include!("../generated/generated_be_orth.rs");
include!("../generated/generated_ber_dz_orth.rs");
include!("../generated/generated_ber_ma_orth.rs");
include!("../generated/generated_bg_orth.rs");
include!("../generated/generated_bh_orth.rs");
include!("../generated/generated_bhb_orth.rs");
include!("../generated/generated_bho_orth.rs");
include!("../generated/generated_bi_orth.rs");
include!("../generated/generated_bin_orth.rs");
include!("../generated/generated_bm_orth.rs");
include!("../generated/generated_bn_orth.rs");
include!("../generated/generated_bo_orth.rs");
include!("../generated/generated_br_orth.rs");
include!("../generated/generated_brx_orth.rs");
include!("../generated/generated_bs_orth.rs");
include!("../generated/generated_bua_orth.rs");
include!("../generated/generated_byn_orth.rs");
include!("../generated/generated_ca_orth.rs");
include!("../generated/generated_ce_orth.rs");
include!("../generated/generated_ch_orth.rs");
include!("../generated/generated_chm_orth.rs");
include!("../generated/generated_chr_orth.rs");
include!("../generated/generated_co_orth.rs");
include!("../generated/generated_crh_orth.rs");
include!("../generated/generated_cs_orth.rs");
include!("../generated/generated_csb_orth.rs");
include!("../generated/generated_cu_orth.rs");
include!("../generated/generated_cv_orth.rs");
include!("../generated/generated_cy_orth.rs");
include!("../generated/generated_da_orth.rs");
include!("../generated/generated_de_orth.rs");
include!("../generated/generated_doi_orth.rs");
include!("../generated/generated_dv_orth.rs");
include!("../generated/generated_dz_orth.rs");
include!("../generated/generated_ee_orth.rs");
include!("../generated/generated_el_orth.rs");
include!("../generated/generated_en_orth.rs");
include!("../generated/generated_eo_orth.rs");
include!("../generated/generated_es_orth.rs");
include!("../generated/generated_et_orth.rs");
include!("../generated/generated_eu_orth.rs");
include!("../generated/generated_fa_orth.rs");
include!("../generated/generated_fat_orth.rs");
include!("../generated/generated_ff_orth.rs");
include!("../generated/generated_fi_orth.rs");
include!("../generated/generated_fil_orth.rs");
include!("../generated/generated_fj_orth.rs");
include!("../generated/generated_fo_orth.rs");
include!("../generated/generated_fr_orth.rs");
include!("../generated/generated_fur_orth.rs");
include!("../generated/generated_fy_orth.rs");
include!("../generated/generated_ga_orth.rs");
include!("../generated/generated_gd_orth.rs");
include!("../generated/generated_gez_orth.rs");
include!("../generated/generated_gl_orth.rs");
include!("../generated/generated_gn_orth.rs");
include!("../generated/generated_gu_orth.rs");
include!("../generated/generated_gv_orth.rs");
include!("../generated/generated_ha_orth.rs");
include!("../generated/generated_haw_orth.rs");
include!("../generated/generated_he_orth.rs");
include!("../generated/generated_hi_orth.rs");
include!("../generated/generated_hif_orth.rs");
include!("../generated/generated_hne_orth.rs");
include!("../generated/generated_ho_orth.rs");
include!("../generated/generated_hr_orth.rs");
include!("../generated/generated_hsb_orth.rs");
include!("../generated/generated_ht_orth.rs");
include!("../generated/generated_hu_orth.rs");
include!("../generated/generated_hy_orth.rs");
include!("../generated/generated_hz_orth.rs");
include!("../generated/generated_ia_orth.rs");
include!("../generated/generated_id_orth.rs");
include!("../generated/generated_ie_orth.rs");
include!("../generated/generated_ig_orth.rs");
include!("../generated/generated_ii_orth.rs");
include!("../generated/generated_ik_orth.rs");
include!("../generated/generated_io_orth.rs");
include!("../generated/generated_is_orth.rs");
include!("../generated/generated_it_orth.rs");
include!("../generated/generated_iu_orth.rs");
include!("../generated/generated_ja_orth.rs");
include!("../generated/generated_jv_orth.rs");
include!("../generated/generated_ka_orth.rs");
include!("../generated/generated_kaa_orth.rs");
include!("../generated/generated_kab_orth.rs");
include!("../generated/generated_ki_orth.rs");
include!("../generated/generated_kj_orth.rs");
include!("../generated/generated_kk_orth.rs");
include!("../generated/generated_kl_orth.rs");
include!("../generated/generated_km_orth.rs");
include!("../generated/generated_kn_orth.rs");
include!("../generated/generated_ko_orth.rs");
include!("../generated/generated_kok_orth.rs");
include!("../generated/generated_kr_orth.rs");
include!("../generated/generated_ks_orth.rs");
include!("../generated/generated_ku_am_orth.rs");
include!("../generated/generated_ku_iq_orth.rs");
include!("../generated/generated_ku_ir_orth.rs");
include!("../generated/generated_ku_tr_orth.rs");
include!("../generated/generated_kum_orth.rs");
include!("../generated/generated_kv_orth.rs");
include!("../generated/generated_kw_orth.rs");
include!("../generated/generated_kwm_orth.rs");
include!("../generated/generated_ky_orth.rs");
include!("../generated/generated_la_orth.rs");
include!("../generated/generated_lah_orth.rs");
include!("../generated/generated_lb_orth.rs");
include!("../generated/generated_lez_orth.rs");
include!("../generated/generated_lg_orth.rs");
include!("../generated/generated_li_orth.rs");
include!("../generated/generated_ln_orth.rs");
include!("../generated/generated_lo_orth.rs");
include!("../generated/generated_lt_orth.rs");
include!("../generated/generated_lv_orth.rs");
include!("../generated/generated_mag_orth.rs");
include!("../generated/generated_mai_orth.rs");
include!("../generated/generated_mg_orth.rs");
include!("../generated/generated_mh_orth.rs");
include!("../generated/generated_mi_orth.rs");
include!("../generated/generated_mk_orth.rs");
include!("../generated/generated_ml_orth.rs");
include!("../generated/generated_mn_cn_orth.rs");
include!("../generated/generated_mn_mn_orth.rs");
include!("../generated/generated_mni_orth.rs");
include!("../generated/generated_mo_orth.rs");
include!("../generated/generated_mr_orth.rs");
include!("../generated/generated_ms_orth.rs");
include!("../generated/generated_mt_orth.rs");
include!("../generated/generated_my_orth.rs");
include!("../generated/generated_na_orth.rs");
include!("../generated/generated_nb_orth.rs");
include!("../generated/generated_nds_orth.rs");
include!("../generated/generated_ne_orth.rs");
include!("../generated/generated_ng_orth.rs");
include!("../generated/generated_nl_orth.rs");
include!("../generated/generated_nn_orth.rs");
include!("../generated/generated_no_orth.rs");
include!("../generated/generated_nqo_orth.rs");
include!("../generated/generated_nr_orth.rs");
include!("../generated/generated_nso_orth.rs");
include!("../generated/generated_nv_orth.rs");
include!("../generated/generated_ny_orth.rs");
include!("../generated/generated_oc_orth.rs");
include!("../generated/generated_om_orth.rs");
include!("../generated/generated_or_orth.rs");
include!("../generated/generated_os_orth.rs");
include!("../generated/generated_ota_orth.rs");
include!("../generated/generated_pa_orth.rs");
include!("../generated/generated_pa_pk_orth.rs");
include!("../generated/generated_pap_an_orth.rs");
include!("../generated/generated_pap_aw_orth.rs");
include!("../generated/generated_pl_orth.rs");
include!("../generated/generated_pt_orth.rs");
include!("../generated/generated_qu_orth.rs");
include!("../generated/generated_quz_orth.rs");
include!("../generated/generated_rm_orth.rs");
include!("../generated/generated_rn_orth.rs");
include!("../generated/generated_ro_orth.rs");
include!("../generated/generated_ru_orth.rs");
include!("../generated/generated_rw_orth.rs");
include!("../generated/generated_sa_orth.rs");
include!("../generated/generated_sah_orth.rs");
include!("../generated/generated_sat_orth.rs");
include!("../generated/generated_sc_orth.rs");
include!("../generated/generated_sco_orth.rs");
include!("../generated/generated_sd_orth.rs");
include!("../generated/generated_se_orth.rs");
include!("../generated/generated_sel_orth.rs");
include!("../generated/generated_sg_orth.rs");
include!("../generated/generated_sh_orth.rs");
include!("../generated/generated_shs_orth.rs");
include!("../generated/generated_si_orth.rs");
include!("../generated/generated_sid_orth.rs");
include!("../generated/generated_sk_orth.rs");
include!("../generated/generated_sl_orth.rs");
include!("../generated/generated_sm_orth.rs");
include!("../generated/generated_sma_orth.rs");
include!("../generated/generated_smj_orth.rs");
include!("../generated/generated_smn_orth.rs");
include!("../generated/generated_sms_orth.rs");
include!("../generated/generated_sn_orth.rs");
include!("../generated/generated_so_orth.rs");
include!("../generated/generated_sq_orth.rs");
include!("../generated/generated_sr_orth.rs");
include!("../generated/generated_ss_orth.rs");
include!("../generated/generated_st_orth.rs");
include!("../generated/generated_su_orth.rs");
include!("../generated/generated_sv_orth.rs");
include!("../generated/generated_sw_orth.rs");
include!("../generated/generated_syr_orth.rs");
include!("../generated/generated_ta_orth.rs");
include!("../generated/generated_te_orth.rs");
include!("../generated/generated_tg_orth.rs");
include!("../generated/generated_th_orth.rs");
include!("../generated/generated_ti_er_orth.rs");
include!("../generated/generated_ti_et_orth.rs");
include!("../generated/generated_tig_orth.rs");
include!("../generated/generated_tk_orth.rs");
include!("../generated/generated_tl_orth.rs");
include!("../generated/generated_tn_orth.rs");
include!("../generated/generated_to_orth.rs");
include!("../generated/generated_tr_orth.rs");
include!("../generated/generated_ts_orth.rs");
include!("../generated/generated_tt_orth.rs");
include!("../generated/generated_tw_orth.rs");
include!("../generated/generated_ty_orth.rs");
include!("../generated/generated_tyv_orth.rs");
include!("../generated/generated_ug_orth.rs");
include!("../generated/generated_uk_orth.rs");
include!("../generated/generated_und_zmth_orth.rs");
include!("../generated/generated_und_zsye_orth.rs");
include!("../generated/generated_ur_orth.rs");
include!("../generated/generated_uz_orth.rs");
include!("../generated/generated_ve_orth.rs");
include!("../generated/generated_vi_orth.rs");
include!("../generated/generated_vo_orth.rs");
include!("../generated/generated_vot_orth.rs");
include!("../generated/generated_wa_orth.rs");
include!("../generated/generated_wal_orth.rs");
include!("../generated/generated_wen_orth.rs");
include!("../generated/generated_wo_orth.rs");
include!("../generated/generated_xh_orth.rs");
include!("../generated/generated_yap_orth.rs");
include!("../generated/generated_yi_orth.rs");
include!("../generated/generated_yo_orth.rs");
include!("../generated/generated_za_orth.rs");
include!("../generated/generated_zh_cn_orth.rs");
include!("../generated/generated_zh_hk_orth.rs");
include!("../generated/generated_zh_mo_orth.rs");
include!("../generated/generated_zh_sg_orth.rs");
include!("../generated/generated_zh_tw_orth.rs");
include!("../generated/generated_zu_orth.rs");
