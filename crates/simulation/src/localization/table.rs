//! Bilingual string table.

/// `(key, vietnamese, english)` rows.
pub static TRANSLATIONS: &[(&str, &str, &str)] = &[
    ("home", "Trang chủ", "Home"),
    ("scan", "Quét", "Scan"),
    ("map", "Bản đồ", "Map"),
    ("saas", "Quản trị", "SaaS"),
    ("profile", "Cá nhân", "Profile"),
    ("greeting", "Chào Linh Đỗ", "Hello Linh Đỗ"),
    ("eco_points", "Điểm Eco", "Eco-points"),
    ("leaderboard", "Bảng xếp hạng Đại sứ Xanh", "Green Ambassador Leaderboard"),
    ("offline_msg", "Dữ liệu sẽ được đồng bộ khi có mạng", "Data will sync once online"),
    ("offline_mode", "Chế độ ngoại tuyến", "Offline Mode"),
    ("scan_title", "Máy quét AI", "AI Scanner"),
    ("scan_instructions", "Hướng camera vào rác", "Point camera at waste"),
    ("start_scan", "Bắt đầu quét", "Start Scan"),
    ("scanning", "Đang quét...", "Scanning..."),
    ("item_detected", "Phát hiện rác thải", "Waste Detected"),
    ("product", "Sản phẩm", "Product"),
    ("category", "Loại", "Category"),
    ("brand", "Thương hiệu", "Brand"),
    ("group_recyclable", "Tái chế được", "Recyclable"),
    ("group_organic", "Hữu cơ", "Organic"),
    ("group_residual", "Rác còn lại", "Residual"),
    ("disposal_tip", "Hướng dẫn xử lý", "Disposal Tip"),
    ("photo_confirm", "Xác nhận bằng ảnh", "Photo Confirmation"),
    ("photo_confirm_desc", "Chụp ảnh rác trong thùng để xác minh", "Take a photo of waste in the bin to verify"),
    ("confirm_disposal", "Xác nhận xử lý", "Confirm Disposal"),
    ("earned_points", "Đã nhận được", "Earned"),
    ("points", "điểm", "points"),
    ("collection_map", "Bản đồ thu gom", "Collection Map"),
    ("find_nearest", "Tìm gần nhất", "Find Nearest"),
    ("recycling_hub", "Trung tâm tái chế", "Recycling Hub"),
    ("e_waste_bin", "Thùng rác điện tử", "E-waste Bin"),
    ("dashboard", "Bảng điều khiển", "Dashboard"),
    ("epr_report", "Báo cáo EPR", "EPR Report"),
    ("esg_index", "Chỉ số ESG", "ESG Index"),
    ("building_manager", "Quản lý tòa nhà", "Building Manager"),
    ("corporate", "Doanh nghiệp", "Corporate"),
    ("schedule_pickup", "Đặt lịch thu gom", "Schedule Pickup"),
    ("rewards", "Phần thưởng", "Rewards"),
    ("plant_tree", "Trồng cây", "Plant a Tree"),
    ("history", "Lịch sử", "History"),
    ("tx_hash", "Mã giao dịch", "Tx Hash"),
    ("login_zalo", "Đăng nhập với Zalo", "Login with Zalo"),
    ("share_zalo", "Chia sẻ lên Zalo", "Share to Zalo"),
    ("settings", "Cài đặt", "Settings"),
    ("waste_volume", "Khối lượng rác", "Waste Volume"),
    ("co2_reduced", "CO₂ đã giảm", "CO₂ Reduced"),
    ("total_scans", "Tổng lượt quét", "Total Scans"),
    ("this_week", "Tuần này", "This Week"),
    ("this_month", "Tháng này", "This Month"),
    ("pickup_type", "Loại thu gom", "Pickup Type"),
    ("battery", "Pin", "Battery"),
    ("e_waste", "Rác điện tử", "E-waste"),
    ("bulky_waste", "Rác cồng kềnh", "Bulky Waste"),
    ("hazardous", "Rác nguy hại", "Hazardous"),
    ("address", "Địa chỉ", "Address"),
    ("submit_request", "Gửi yêu cầu", "Submit Request"),
    ("level", "Cấp độ", "Level"),
    ("green_ambassador", "Đại sứ Xanh", "Green Ambassador"),
    ("eco_vouchers", "Voucher Eco", "Eco Vouchers"),
    ("powered_by", "Hỗ trợ bởi ResNet-50 AI & Blockchain. Tuân thủ Luật Bảo vệ Môi trường Việt Nam 2020", "Powered by ResNet-50 AI & Blockchain. Compliant with Vietnam Environmental Protection Law 2020"),
    ("verified", "Đã xác minh", "Verified"),
    ("unidentified_brand", "Thương hiệu chưa xác định", "Unidentified Brand"),
    ("help_us_learn", "Giúp chúng tôi học", "Help us learn"),
    ("new_brand_detected", "Thương hiệu mới phát hiện!", "New brand detected!"),
    ("is_this_correct", "Đây là loại vật liệu nào?", "What material is this?"),
    ("confirm", "Xác nhận", "Confirm"),
    ("thank_you", "Cảm ơn bạn!", "Thank you!"),
    ("learning_data", "Dữ liệu đã được ghi nhận.", "Data has been recorded."),
    ("shape", "Hình dạng", "Shape"),
    ("material_type", "Vật liệu", "Material"),
    ("navigate", "Chỉ đường", "Navigate"),
    ("plastic", "Nhựa", "Plastic"),
    ("glass", "Thủy tinh", "Glass"),
    ("paper", "Giấy", "Paper"),
    ("metal", "Kim loại", "Metal"),
    ("organic", "Hữu cơ", "Organic"),
    ("today", "Hôm nay", "Today"),
    ("yesterday", "Hôm qua", "Yesterday"),
    ("quick_actions", "Thao tác nhanh", "Quick Actions"),
    ("weekly_goal", "Mục tiêu tuần", "Weekly Goal"),
    ("scan_now", "Quét ngay", "Scan Now"),
    ("view_map", "Xem bản đồ", "View Map"),
    ("request_pickup", "Yêu cầu thu gom", "Request Pickup"),
    ("redeem_points", "Quy đổi điểm", "Redeem Points"),
    ("camera_connecting", "Đang kết nối camera...", "Connecting camera..."),
    ("camera_unavailable", "Camera không khả dụng", "Camera unavailable"),
    ("simulation_mode", "Camera không khả dụng. Đang dùng chế độ mô phỏng.", "Camera unavailable. Using simulation mode."),
    ("capture_to_scan", "Chụp ảnh để quét", "Capture to Scan"),
    ("auto_detects", "Nhận dạng vật liệu & hình dạng tự động", "Auto-detects material & shape"),
    ("local_processing", "Xử lý nội bộ", "Local Processing"),
    ("cloud_processing", "Xử lý đám mây", "Cloud Processing"),
    ("step_geometry", "1. Xác nhận hình học 3D", "1. Geometric Validation"),
    ("step_surface", "2. Phân tích bề mặt vật liệu", "2. Material Surface Analysis"),
    ("step_category", "3. Lọc danh mục sản phẩm", "3. Category Gate Filter"),
    ("step_brand", "4. Tra cứu thương hiệu", "4. Brand Lookup"),
    ("confidence", "Độ tin cậy", "Confidence"),
    ("confirm_brand", "Xác nhận thương hiệu", "Confirm Brand"),
    ("other_brand", "Thương hiệu khác", "Other brand"),
    ("epr_data_point", "Dữ liệu EPR", "EPR Data Point"),
    ("verify_disposal", "Xác minh việc xử lý", "Verify Disposal"),
    ("point_at_bin", "Hướng vào thùng rác", "Point at recycling bin"),
    ("capture_disposal_proof", "Chụp bằng chứng xử lý", "Capture Disposal Proof"),
    ("disposal_proof", "Bằng chứng xử lý", "Disposal Proof"),
    ("source_photo", "Ảnh gốc", "Source Photo"),
    ("verifying_disposal", "Xác minh việc xử lý...", "Verifying disposal..."),
    ("writing_blockchain", "Ghi blockchain...", "Writing to blockchain..."),
    ("crediting_points", "Cập nhật điểm...", "Crediting points..."),
    ("data_sync", "Đồng bộ dữ liệu...", "Data synchronization..."),
    ("synced_to_dashboard", "Đã đồng bộ lên SaaS Dashboard", "Synced to SaaS Dashboard"),
    ("data_synced_desc", "Dữ liệu đã được đồng bộ lên Bảng điều khiển SaaS.", "Data has been synced to your SaaS Dashboard."),
    ("data_integrity", "Độ toàn vẹn dữ liệu đã xác nhận", "Data integrity confirmed"),
    ("you", "(bạn)", "(you)"),
    ("rank_levels", "Cấp độ Đại sứ Xanh", "Ambassador Rank Levels"),
    ("current", "Hiện tại", "Current"),
    ("points_more", "điểm nữa", "more"),
    ("weekly_target_achieved", "Đã đạt mục tiêu tuần!", "Weekly target achieved!"),
    ("done", "Đạt", "Done"),
    ("all", "Tất cả", "All"),
    ("other", "Khác", "Other"),
    ("cancel", "Hủy", "Cancel"),
    ("sector", "Ngành", "Sector"),
    ("qty", "SL", "Qty"),
    ("items_collected", "Số lượng thu gom", "Items Collected"),
    ("epr_detailed_report", "Báo cáo EPR chi tiết", "EPR Detailed Report"),
    ("waste_by_sector", "Tỷ lệ rác thải theo ngành", "Waste Market Share by Sector"),
    ("by_brand", "theo thương hiệu", "by brand"),
    ("local_other", "Địa phương/Khác", "Local/Other"),
    ("projected_esg", "Dự báo ESG từ lịch thu gom", "Projected ESG from Bookings"),
    ("bookings", "Lịch hẹn", "Bookings"),
    ("upcoming_pickups", "Lịch thu gom sắp tới", "Upcoming Pickups"),
    ("select_date", "Chọn ngày", "Select Date"),
    ("estimated_amount", "Khối lượng ước tính", "Estimated Amount"),
    ("notes", "Ghi chú", "Notes"),
    ("notes_placeholder", "Hướng dẫn thêm cho đội thu gom...", "Additional instructions for the pickup team..."),
    ("enter_address", "Nhập địa chỉ...", "Enter address..."),
    ("scan_qr_tag", "Quét QR vị trí", "Scan QR Tag"),
    ("qr_verified", "Vị trí đã xác minh qua QR", "QR-verified location"),
    ("location_verified", "Đã xác minh vị trí", "Location Verified"),
    ("no_location", "Chưa có địa chỉ", "No location"),
    ("building_id", "Mã tòa nhà", "Building ID"),
    ("request_submitted", "Yêu cầu đã gửi!", "Request submitted!"),
    ("pickup_recorded", "Lịch thu gom đã được ghi nhận.", "Pickup has been recorded."),
    ("submit_another", "Gửi lại", "Submit another"),
    ("tons", "tấn", "tons"),
    ("kg", "kg", "kg"),
    ("live_session", "Phiên hiện tại", "Live Session"),
    ("recyclable_share", "Tỷ lệ tái chế", "Recyclable Share"),
];
